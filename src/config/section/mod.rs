//! Configuration section definitions.
//!
//! Each module corresponds to a section in `waypost.toml`:
//!
//! | Module       | TOML Section    | Purpose                             |
//! |--------------|-----------------|-------------------------------------|
//! | `site`       | `[site]`        | Site identity, base public URL      |
//! | `locales`    | `[locales]`     | Locale set, hreflang, availability  |
//! | `revalidate` | `[revalidate]`  | Webhook route, invalidation fan-out |
//! | `purge`      | `[purge]`       | Outbound cache-invalidation API     |
//! | `serve`      | `[serve]`       | Webhook server                      |

mod locales;
mod purge;
mod revalidate;
mod serve;
mod site;

pub use locales::{DEFAULT_SHARED_SEGMENTS, LocalesConfig};
pub use purge::PurgeConfig;
pub use revalidate::RevalidateConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
