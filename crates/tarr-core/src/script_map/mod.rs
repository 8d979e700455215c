//! Latin ⇄ Armenian script tables.
//!
//! The forward table maps short Latin tokens to an ordered list of Armenian
//! substitutions (index 0 is canonical); the reverse table maps Armenian
//! letters and digraphs to one Latin spelling. Both are loaded once from TOML
//! and shared read-only for the life of the process.

mod config;
mod trie;

use std::sync::OnceLock;

pub use config::{
    parse_script_map_toml, ScriptMapError, ScriptMapTables, MAX_FORWARD_TOKEN_CHARS,
    MAX_REVERSE_TOKEN_CHARS,
};
pub use trie::{TokenTrie, TrieLookupResult};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_script_map.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default script map TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

pub struct ScriptMap {
    forward: TokenTrie<Vec<String>>,
    reverse: TokenTrie<String>,
}

impl ScriptMap {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ScriptMapError> {
        // Validate eagerly
        parse_script_map_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ScriptMapError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ScriptMap {
        static INSTANCE: OnceLock<ScriptMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            ScriptMap::from_toml(toml_str).expect("script map TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ScriptMapError> {
        parse_script_map_toml(toml_str).map(Self::from_tables)
    }

    pub fn from_tables(tables: ScriptMapTables) -> Self {
        let mut forward = TokenTrie::new();
        for (latin, substitutions) in tables.forward {
            forward.insert(&latin, substitutions);
        }
        let mut reverse = TokenTrie::new();
        for (armenian, latin) in tables.reverse {
            reverse.insert(&armenian, latin);
        }
        ScriptMap { forward, reverse }
    }

    /// Ordered substitutions for an exact Latin token.
    pub fn forward_variants(&self, token: &str) -> Option<&[String]> {
        self.forward.get(token).map(Vec::as_slice)
    }

    /// Longest forward token at the start of `chars`.
    pub fn forward_match(&self, chars: &[char]) -> Option<(usize, &[String])> {
        self.forward
            .longest_match(chars)
            .map(|(len, subs)| (len, subs.as_slice()))
    }

    /// Longest reverse token at the start of `chars`.
    pub fn reverse_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        self.reverse
            .longest_match(chars)
            .map(|(len, latin)| (len, latin.as_str()))
    }

    /// True when `c` on its own is a key of the reverse table.
    pub fn is_reverse_key(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.reverse.get(c.encode_utf8(&mut buf)).is_some()
    }

    /// True when any character of `text` is a reverse-table key.
    pub fn contains_target_script(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_reverse_key(c))
    }
}
