use crate::script_map::ScriptMap;

impl ScriptMap {
    /// Deterministic Latin → Armenian rendering using the canonical
    /// substitution of every token.
    pub fn to_target_script(&self, input: &str) -> String {
        self.tokenize(input).canonical()
    }

    /// Deterministic Armenian → Latin rendering.
    ///
    /// Multi-character tokens (the "ու" digraph) are tried before single
    /// letters; unmapped characters are copied unchanged. Case is preserved.
    pub fn to_source_script(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut result = String::with_capacity(input.len());
        let mut i = 0;

        while i < chars.len() {
            match self.reverse_match(&chars[i..]) {
                Some((len, latin)) => {
                    result.push_str(latin);
                    i += len;
                }
                None => {
                    result.push(chars[i]);
                    i += 1;
                }
            }
        }

        result
    }
}

/// Canonical Latin → Armenian with the global script map.
pub fn to_canonical_target_script(input: &str) -> String {
    ScriptMap::global().to_target_script(input)
}

/// Armenian → Latin with the global script map.
pub fn to_source_script(input: &str) -> String {
    ScriptMap::global().to_source_script(input)
}
