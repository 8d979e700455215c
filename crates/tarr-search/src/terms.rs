use std::collections::HashSet;

use tracing::{debug, debug_span, warn};

use tarr_core::settings::SearchSettings;
use tarr_core::ScriptMap;

/// Build the ordered, de-duplicated list of catalog query terms for a name.
///
/// Order: the original text, its reverse transliteration (only when it
/// contains Armenian letters), then forward candidates in expansion order.
/// Blank terms are dropped since an empty catalog search matches everything.
pub fn build_search_terms(
    map: &ScriptMap,
    original: &str,
    limits: &SearchSettings,
) -> Vec<String> {
    let _span = debug_span!("build_search_terms").entered();

    let mut terms = Vec::new();
    let mut seen = HashSet::new();
    // The original is not queried verbatim when blank: an empty catalog
    // search matches every product.
    let mut push = |term: String| {
        if !term.trim().is_empty() && seen.insert(term.clone()) {
            terms.push(term);
        }
    };

    push(original.to_string());

    if map.contains_target_script(original) {
        push(map.to_source_script(original));
    }

    let input_chars = original.chars().count();
    if input_chars > limits.max_input_chars {
        warn!(
            input_chars,
            max_input_chars = limits.max_input_chars,
            "input too long, skipping candidate expansion"
        );
    } else {
        let tokenization = map.tokenize(original);
        let total = tokenization.candidate_count();
        if total > limits.max_candidates {
            warn!(
                total,
                max_candidates = limits.max_candidates,
                "candidate expansion truncated"
            );
        }
        for candidate in tokenization.candidates().take(limits.max_candidates) {
            push(candidate);
        }
    }

    debug!(terms = terms.len(), "search terms built");
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> SearchSettings {
        SearchSettings {
            max_results: 3,
            max_input_chars: 48,
            max_candidates: 1024,
        }
    }

    #[test]
    fn test_latin_single_variant() {
        let terms = build_search_terms(ScriptMap::global(), "ananas", &limits());
        assert_eq!(terms, vec!["ananas", "անանաս"]);
    }

    #[test]
    fn test_armenian_adds_reverse() {
        let terms = build_search_terms(ScriptMap::global(), "սուրճ", &limits());
        assert_eq!(terms[0], "սուրճ");
        assert_eq!(terms[1], "surch");
        // Armenian letters pass through the forward tokenizer unchanged.
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_mixed_script() {
        let terms = build_search_terms(ScriptMap::global(), "kola կոլա", &limits());
        assert_eq!(terms[0], "kola կոլա");
        assert_eq!(terms[1], "kola kvola");
        // k(2) o(2) l(1) a(1) -> 4 forward candidates
        assert_eq!(terms.len(), 2 + 4);
        assert!(terms.contains(&"կօլա կոլա".to_string()));
        assert!(terms.contains(&"քոլա կոլա".to_string()));
    }

    #[test]
    fn test_duplicates_dropped() {
        // Uppercase input lower-cases into candidates; the original stays distinct.
        let terms = build_search_terms(ScriptMap::global(), "XX", &limits());
        assert_eq!(terms, vec!["XX", "խխ", "խղ", "ղխ", "ղղ"]);
    }

    #[test]
    fn test_unmapped_input_deduplicates_with_original() {
        let terms = build_search_terms(ScriptMap::global(), "123", &limits());
        assert_eq!(terms, vec!["123"]);
    }

    #[test]
    fn test_blank_input_has_no_terms() {
        assert!(build_search_terms(ScriptMap::global(), "", &limits()).is_empty());
        assert!(build_search_terms(ScriptMap::global(), "   ", &limits()).is_empty());
    }

    #[test]
    fn test_candidate_cap() {
        let limits = SearchSettings {
            max_candidates: 5,
            ..limits()
        };
        // 3^6 = 729 candidates, capped to 5.
        let terms = build_search_terms(ScriptMap::global(), "cccccc", &limits);
        assert_eq!(terms.len(), 1 + 5);
    }

    #[test]
    fn test_long_input_not_expanded() {
        let limits = SearchSettings {
            max_input_chars: 4,
            ..limits()
        };
        let terms = build_search_terms(ScriptMap::global(), "ananas", &limits);
        assert_eq!(terms, vec!["ananas"]);
    }
}
