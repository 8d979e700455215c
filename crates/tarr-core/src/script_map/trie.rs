use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult<'a, V> {
    None,
    Prefix,
    Exact(&'a V),
    ExactAndPrefix(&'a V),
}

#[derive(Debug)]
struct Node<V> {
    children: HashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Character-keyed trie backing both directions of the script map.
#[derive(Debug)]
pub struct TokenTrie<V> {
    root: Node<V>,
    max_key_chars: usize,
}

impl<V> TokenTrie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            max_key_chars: 0,
        }
    }

    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = &mut self.root;
        let mut len = 0;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
            len += 1;
        }
        node.value = Some(value);
        self.max_key_chars = self.max_key_chars.max(len);
    }

    /// Length in characters of the longest inserted key.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn lookup(&self, key: &str) -> TrieLookupResult<'_, V> {
        let mut node = &self.root;
        for c in key.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match (&node.value, has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(v), false) => TrieLookupResult::Exact(v),
            (Some(v), true) => TrieLookupResult::ExactAndPrefix(v),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        match self.lookup(key) {
            TrieLookupResult::Exact(v) | TrieLookupResult::ExactAndPrefix(v) => Some(v),
            TrieLookupResult::None | TrieLookupResult::Prefix => None,
        }
    }

    /// Longest key that is a prefix of `chars`, as `(length in chars, value)`.
    ///
    /// Equivalent to probing lengths `max_key_chars()..=1` in turn and taking
    /// the first hit.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &V)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in chars.iter().take(self.max_key_chars).enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(v) = &node.value {
                best = Some((i + 1, v));
            }
        }
        best
    }
}

impl<V> Default for TokenTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenTrie<&'static str> {
        let mut trie = TokenTrie::new();
        trie.insert("s", "ս");
        trie.insert("sh", "շ");
        trie.insert("k", "կ");
        trie.insert("kh", "խ");
        trie.insert("ts", "ց");
        trie
    }

    #[test]
    fn test_exact() {
        assert_eq!(sample().lookup("sh"), TrieLookupResult::Exact(&"շ"));
    }

    #[test]
    fn test_exact_and_prefix() {
        assert_eq!(sample().lookup("s"), TrieLookupResult::ExactAndPrefix(&"ս"));
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(sample().lookup("t"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_none_for_unknown() {
        assert_eq!(sample().lookup("xyz"), TrieLookupResult::None);
        assert_eq!(sample().get("t"), None);
    }

    #[test]
    fn test_max_key_chars() {
        assert_eq!(sample().max_key_chars(), 2);
    }

    #[test]
    fn test_longest_match_prefers_digraph() {
        let trie = sample();
        let chars: Vec<char> = "shat".chars().collect();
        assert_eq!(trie.longest_match(&chars), Some((2, &"շ")));
    }

    #[test]
    fn test_longest_match_falls_back_to_single() {
        let trie = sample();
        let chars: Vec<char> = "sa".chars().collect();
        assert_eq!(trie.longest_match(&chars), Some((1, &"ս")));
    }

    #[test]
    fn test_longest_match_dead_prefix() {
        // "t" is only a prefix of "ts"; no single-letter key exists.
        let trie = sample();
        let chars: Vec<char> = "ta".chars().collect();
        assert_eq!(trie.longest_match(&chars), None);
    }

    #[test]
    fn test_longest_match_empty_input() {
        assert_eq!(sample().longest_match(&[]), None);
    }
}
