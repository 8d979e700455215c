//! Search orchestration: try every spelling until the catalog answers.

use std::collections::HashSet;

use tracing::{debug, debug_span, info, warn};

use tarr_core::settings::{settings, SearchSettings};
use tarr_core::ScriptMap;

use crate::catalog::{Catalog, ProductHit};
use crate::terms::build_search_terms;


/// Terminal state of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Hits from the first term that matched, de-duplicated by name and capped.
    Found(Vec<ProductHit>),
    /// No term matched; `message` is user-facing.
    NotFound { message: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound { message } => Some(message.as_str()),
        }
    }

    pub fn hits(&self) -> &[ProductHit] {
        match self {
            Self::Found(hits) => hits,
            Self::NotFound { .. } => &[],
        }
    }

    /// `(error_message, results)` pair.
    pub fn into_parts(self) -> (Option<String>, Vec<ProductHit>) {
        match self {
            Self::Found(hits) => (None, hits),
            Self::NotFound { message } => (Some(message), Vec::new()),
        }
    }
}

pub fn not_found_message(original_text: &str) -> String {
    format!("Տվյալ ապրանքը `{original_text}` չի գտնվել 😕")
}

/// Search with the global script map and settings.
pub fn search(catalog: &dyn Catalog, original_text: &str) -> SearchOutcome {
    search_with(
        catalog,
        ScriptMap::global(),
        &settings().search,
        original_text,
    )
}

/// Query `catalog` once per search term, stopping at the first term with hits.
///
/// Per-term failures are logged and skipped; they never end the search.
pub fn search_with(
    catalog: &dyn Catalog,
    map: &ScriptMap,
    limits: &SearchSettings,
    original_text: &str,
) -> SearchOutcome {
    let _span = debug_span!("search", original = original_text).entered();

    let terms = build_search_terms(map, original_text, limits);
    for term in &terms {
        match catalog.search_products(term) {
            Ok(hits) if hits.is_empty() => {
                debug!(term = term.as_str(), "no hits");
            }
            Ok(hits) => {
                info!(term = term.as_str(), hits = hits.len(), "catalog matched");
                return SearchOutcome::Found(dedup_by_name(hits, limits.max_results));
            }
            Err(e) => {
                warn!(term = term.as_str(), error = %e, "catalog query failed");
            }
        }
    }

    debug!(tried = terms.len(), "no term matched");
    SearchOutcome::NotFound {
        message: not_found_message(original_text),
    }
}

/// Keep the first hit per name, in order, up to `max_results`.
fn dedup_by_name(hits: Vec<ProductHit>, max_results: usize) -> Vec<ProductHit> {
    let mut seen = HashSet::new();
    hits.into_iter()
        .filter(|hit| seen.insert(hit.name.clone()))
        .take(max_results)
        .collect()
}
