//! Locale-aware URL resolution.
//!
//! Maps (locale, content path) tuples to canonical site-relative URLs and
//! back, and computes the alternate-locale link set for hreflang metadata.
//!
//! # Module Structure
//!
//! - [`resolve`]: prefix resolution, prefix stripping, availability policy
//! - [`hreflang`]: locale -> language tag lookup
//! - [`alternates`]: alternate link sets per navigation

pub mod alternates;
pub mod hreflang;
pub mod resolve;

pub use alternates::{AlternateLink, AlternateLinks, Navigation, compute_alternates};
pub use hreflang::{X_DEFAULT, format_hreflang};
pub use resolve::{
    detect_locale_prefix, is_available_for_locale, resolve, resolve_absolute, strip_locale_prefix,
};
