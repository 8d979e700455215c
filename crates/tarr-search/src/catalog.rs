use serde::{Deserialize, Serialize};

/// One product returned by a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHit {
    pub name: String,
    pub price: String,
    pub permalink: String,
}

impl ProductHit {
    /// Single-line rendering: `name — price դրամ — link`.
    pub fn summary_line(&self) -> String {
        format!("{} — {} դրամ — {}", self.name, self.price, self.permalink)
    }
}

/// Failure of a single catalog query. Never fatal to a search.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("decode error: {0}")]
    Decode(String),
}

/// Exact-match product lookup against an external catalog.
pub trait Catalog {
    fn search_products(&self, term: &str) -> Result<Vec<ProductHit>, CatalogError>;
}
