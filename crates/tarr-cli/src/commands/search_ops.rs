use std::fmt::Write;

use serde::Serialize;
use tracing::info;

use tarr_core::settings::settings;
use tarr_core::to_canonical_target_script;
use tarr_search::{
    search, storefront_search_url, ProductHit, SearchOutcome, WooCommerceCatalog,
    WooCommerceConfig,
};

pub struct SearchArgs {
    pub name: String,
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    /// Storefront for the "more results" link; defaults to `base_url`.
    pub storefront: Option<String>,
    pub json: bool,
}

pub fn search_cmd(args: SearchArgs) {
    let name = args.name.trim();
    info!(
        name,
        armenian = to_canonical_target_script(name).as_str(),
        "searching catalog"
    );

    let storefront = args.storefront.unwrap_or_else(|| args.base_url.clone());
    let catalog = WooCommerceCatalog::new(
        WooCommerceConfig {
            base_url: args.base_url,
            consumer_key: args.consumer_key,
            consumer_secret: args.consumer_secret,
        },
        &settings().catalog,
    );

    let outcome = search(&catalog, name);
    let link = match storefront_search_url(&storefront, name) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::warn!(storefront = storefront.as_str(), error = %e, "invalid storefront URL");
            None
        }
    };
    print!("{}", render_outcome(&outcome, link.as_deref(), args.json));
}

#[derive(Serialize)]
struct SearchReport<'a> {
    message: Option<&'a str>,
    results: &'a [ProductHit],
    #[serde(skip_serializing_if = "Option::is_none")]
    more_results: Option<&'a str>,
}

/// Text or JSON rendering of a search outcome. The storefront link is only
/// shown when something was found.
pub fn render_outcome(outcome: &SearchOutcome, link: Option<&str>, json: bool) -> String {
    let link = link.filter(|_| outcome.is_found());

    if json {
        let report = SearchReport {
            message: outcome.message(),
            results: outcome.hits(),
            more_results: link,
        };
        let mut out = serde_json::to_string_pretty(&report).unwrap_or_default();
        out.push('\n');
        return out;
    }

    match outcome {
        SearchOutcome::NotFound { message } => format!("{message}\n"),
        SearchOutcome::Found(hits) => {
            let mut out = String::new();
            for hit in hits {
                let _ = writeln!(out, "{}", hit.summary_line());
            }
            if let Some(link) = link {
                let _ = writeln!(out, "Այլ արդյունքների համար անցեք հետևյալ հղումով {link}");
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarr_search::not_found_message;

    fn hit(name: &str) -> ProductHit {
        ProductHit {
            name: name.to_string(),
            price: "500".to_string(),
            permalink: format!("https://shop.am/{name}"),
        }
    }

    #[test]
    fn test_render_found_text() {
        let outcome = SearchOutcome::Found(vec![hit("a"), hit("b")]);
        let out = render_outcome(&outcome, Some("https://shop.am/?s=x&post_type=product"), false);
        assert_eq!(
            out,
            "a — 500 դրամ — https://shop.am/a\n\
             b — 500 դրամ — https://shop.am/b\n\
             Այլ արդյունքների համար անցեք հետևյալ հղումով https://shop.am/?s=x&post_type=product\n"
        );
    }

    #[test]
    fn test_render_not_found_text_has_no_link() {
        let outcome = SearchOutcome::NotFound {
            message: not_found_message("xxxxx"),
        };
        let out = render_outcome(&outcome, Some("https://shop.am/?s=xxxxx"), false);
        assert_eq!(out, format!("{}\n", not_found_message("xxxxx")));
    }

    #[test]
    fn test_render_json() {
        let outcome = SearchOutcome::Found(vec![hit("a")]);
        let out = render_outcome(&outcome, Some("https://shop.am/?s=a"), true);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(v["message"].is_null());
        assert_eq!(v["results"][0]["name"], "a");
        assert_eq!(v["results"][0]["permalink"], "https://shop.am/a");
        assert_eq!(v["more_results"], "https://shop.am/?s=a");
    }

    #[test]
    fn test_render_json_not_found() {
        let outcome = SearchOutcome::NotFound {
            message: "nope".to_string(),
        };
        let v: serde_json::Value =
            serde_json::from_str(&render_outcome(&outcome, None, true)).unwrap();
        assert_eq!(v["message"], "nope");
        assert_eq!(v["results"], serde_json::json!([]));
        assert!(v.get("more_results").is_none());
    }
}
