//! Multi-term product search over an external catalog.
//!
//! A product name is expanded into every plausible spelling (original,
//! reverse-transliterated, forward candidates) and each spelling is tried
//! against the catalog until one returns hits.

pub mod catalog;
pub mod search;
pub mod storefront;
pub mod terms;
pub mod woocommerce;

pub use catalog::{Catalog, CatalogError, ProductHit};
pub use search::{not_found_message, search, search_with, SearchOutcome};
pub use storefront::storefront_search_url;
pub use terms::build_search_terms;
pub use woocommerce::{WooCommerceCatalog, WooCommerceConfig};
