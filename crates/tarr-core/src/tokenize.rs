use std::borrow::Cow;

use tracing::{debug, debug_span};

use crate::expand::Candidates;
use crate::script_map::ScriptMap;

/// One greedy step of forward tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'m> {
    /// The lower-cased input span this segment consumed (1–3 characters).
    pub span: String,
    /// Ordered substitutions; a singleton of `span` when nothing matched.
    pub substitutions: Cow<'m, [String]>,
}

impl Segment<'_> {
    /// Number of characters consumed.
    pub fn len(&self) -> usize {
        self.span.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// True when the span had no forward-table entry.
    pub fn is_passthrough(&self) -> bool {
        matches!(self.substitutions, Cow::Owned(_))
    }

    pub fn canonical(&self) -> &str {
        &self.substitutions[0]
    }
}

/// Gap-free, overlap-free segmentation of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization<'m> {
    segments: Vec<Segment<'m>>,
}

impl<'m> Tokenization<'m> {
    pub fn segments(&self) -> &[Segment<'m>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Size of the Cartesian product over all substitution lists, saturating
    /// at `usize::MAX`.
    pub fn candidate_count(&self) -> usize {
        self.segments
            .iter()
            .fold(1usize, |acc, s| acc.saturating_mul(s.substitutions.len()))
    }

    /// Concatenation of every span; equals the lower-cased input.
    pub fn reconstruct(&self) -> String {
        self.segments.iter().map(|s| s.span.as_str()).collect()
    }

    /// First substitution of every segment.
    pub fn canonical(&self) -> String {
        self.segments.iter().map(Segment::canonical).collect()
    }

    /// Lazily enumerate every fully-substituted string.
    pub fn candidates(&self) -> Candidates<'_, 'm> {
        Candidates::new(&self.segments)
    }
}

impl ScriptMap {
    /// Greedy maximal-munch segmentation of `input` against the forward table.
    ///
    /// Never fails: characters without an entry become single-character
    /// passthrough segments.
    pub fn tokenize(&self, input: &str) -> Tokenization<'_> {
        let _span = debug_span!("tokenize", input_len = input.len()).entered();

        let chars: Vec<char> = input.to_lowercase().chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match self.forward_match(&chars[i..]) {
                Some((len, subs)) => {
                    segments.push(Segment {
                        span: chars[i..i + len].iter().collect(),
                        substitutions: Cow::Borrowed(subs),
                    });
                    i += len;
                }
                None => {
                    let ch = chars[i].to_string();
                    segments.push(Segment {
                        span: ch.clone(),
                        substitutions: Cow::Owned(vec![ch]),
                    });
                    i += 1;
                }
            }
        }

        debug!(segments = segments.len(), "tokenized");
        Tokenization { segments }
    }
}

/// Tokenize with the global script map.
pub fn tokenize(input: &str) -> Tokenization<'static> {
    ScriptMap::global().tokenize(input)
}
