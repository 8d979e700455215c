//! Latin ⇄ Armenian transliteration engine.
//!
//! Greedy tokenization against a forward script map, Cartesian expansion of
//! ambiguous letters into candidate spellings, and deterministic canonical
//! conversion in both directions.

pub mod canonical;
pub mod expand;
pub mod script_map;
pub mod settings;
pub mod tokenize;

#[cfg(test)]
mod proptests;

pub use canonical::{to_canonical_target_script, to_source_script};
pub use expand::{expand, Candidates};
pub use script_map::ScriptMap;
pub use tokenize::{tokenize, Segment, Tokenization};
