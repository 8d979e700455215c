//! WooCommerce REST catalog (`/wp-json/<version>/products?search=`).

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use tarr_core::settings::CatalogSettings;

use crate::catalog::{Catalog, CatalogError, ProductHit};

/// Store location and API credentials.
#[derive(Clone)]
pub struct WooCommerceConfig {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

/// Catalog backed by the WooCommerce products endpoint.
///
/// Authenticates with `consumer_key`/`consumer_secret` query parameters, which
/// WooCommerce only accepts over HTTPS.
pub struct WooCommerceCatalog {
    agent: ureq::Agent,
    endpoint: String,
    consumer_key: String,
    consumer_secret: String,
    unpriced_label: String,
}

impl WooCommerceCatalog {
    pub fn new(config: WooCommerceConfig, settings: &CatalogSettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(settings.timeout()))
            .build()
            .into();
        Self {
            agent,
            endpoint: products_endpoint(&config.base_url, &settings.api_version),
            consumer_key: config.consumer_key,
            consumer_secret: config.consumer_secret,
            unpriced_label: settings.unpriced_label.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Catalog for WooCommerceCatalog {
    fn search_products(&self, term: &str) -> Result<Vec<ProductHit>, CatalogError> {
        debug!(endpoint = self.endpoint.as_str(), term, "querying catalog");
        let body = self
            .agent
            .get(self.endpoint.as_str())
            .query("search", term)
            .query("consumer_key", &self.consumer_key)
            .query("consumer_secret", &self.consumer_secret)
            .call()
            .map_err(map_ureq_error)?
            .into_body()
            .read_to_string()
            .map_err(map_ureq_error)?;
        parse_products(&body, &self.unpriced_label)
    }
}

fn products_endpoint(base_url: &str, api_version: &str) -> String {
    format!(
        "{}/wp-json/{}/products",
        base_url.trim_end_matches('/'),
        api_version.trim_matches('/')
    )
}

fn map_ureq_error(e: ureq::Error) -> CatalogError {
    match e {
        ureq::Error::StatusCode(code) => CatalogError::Status(code),
        ureq::Error::Timeout(_) => CatalogError::Timeout,
        other => CatalogError::Transport(other.to_string()),
    }
}

#[derive(Deserialize)]
struct WcProduct {
    name: String,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    permalink: Option<String>,
}

/// Decode a products response body into hits.
///
/// A missing, null or empty price becomes `unpriced_label`; a missing
/// permalink becomes the empty string.
pub(crate) fn parse_products(
    body: &str,
    unpriced_label: &str,
) -> Result<Vec<ProductHit>, CatalogError> {
    let products: Vec<WcProduct> =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    Ok(products
        .into_iter()
        .map(|p| ProductHit {
            name: p.name,
            price: render_price(p.price).unwrap_or_else(|| unpriced_label.to_string()),
            permalink: p.permalink.unwrap_or_default(),
        })
        .collect())
}

fn render_price(price: Option<Value>) -> Option<String> {
    match price? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
