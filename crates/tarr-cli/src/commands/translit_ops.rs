use std::fmt::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use tarr_core::settings::settings;
use tarr_core::{expand, to_canonical_target_script, to_source_script, tokenize, Tokenization};

pub fn forward(text: &str) {
    println!("{}", to_canonical_target_script(text));
}

pub fn reverse(text: &str) {
    println!("{}", to_source_script(text));
}

pub fn tokenize_cmd(text: &str) {
    print!("{}", render_tokenization(&tokenize(text)));
}

pub fn candidates(text: &str, limit: Option<usize>, json: bool) {
    print!("{}", render_candidates(text, limit, json));
}

/// One line per segment: `span → sub1 | sub2`, spans padded to equal width.
pub fn render_tokenization(t: &Tokenization<'_>) -> String {
    let width = t
        .segments()
        .iter()
        .map(|s| UnicodeWidthStr::width(s.span.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for seg in t.segments() {
        let pad = width - UnicodeWidthStr::width(seg.span.as_str());
        let _ = write!(
            out,
            "{}{} → {}",
            seg.span,
            " ".repeat(pad),
            seg.substitutions.join(" | ")
        );
        if seg.is_passthrough() {
            out.push_str("  (passthrough)");
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct CandidatesReport<'a> {
    input: &'a str,
    canonical: String,
    total: usize,
    candidates: Vec<String>,
}

/// Without `limit`, listing stops at `search.max_candidates`.
pub fn render_candidates(text: &str, limit: Option<usize>, json: bool) -> String {
    let t = tokenize(text);
    let limit = limit.unwrap_or(settings().search.max_candidates);
    let report = CandidatesReport {
        input: text,
        canonical: t.canonical(),
        total: t.candidate_count(),
        candidates: expand(&t).take(limit).collect(),
    };

    if json {
        // Serializing plain strings and integers cannot fail.
        let mut out = serde_json::to_string_pretty(&report).unwrap_or_default();
        out.push('\n');
        return out;
    }

    let mut out = format!(
        "{} candidate(s), canonical: {}\n",
        report.total, report.canonical
    );
    for (i, c) in report.candidates.iter().enumerate() {
        let _ = writeln!(out, "#{:>3}: {}", i + 1, c);
    }
    if report.candidates.len() < report.total {
        let _ = writeln!(out, "... {} more", report.total - report.candidates.len());
    }
    out
}
