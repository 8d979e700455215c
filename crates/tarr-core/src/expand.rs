//! Cartesian-product expansion of a tokenization.
//!
//! Candidates are produced in odometer order: the last segment varies
//! fastest, so the first candidate is always the canonical string. Nothing is
//! buffered beyond one index per segment; callers bound the work with
//! `take`.

use crate::tokenize::{Segment, Tokenization};

/// Lazy iterator over every fully-substituted string of a tokenization.
#[derive(Debug, Clone)]
pub struct Candidates<'t, 'm> {
    segments: &'t [Segment<'m>],
    indices: Vec<usize>,
    done: bool,
}

impl<'t, 'm> Candidates<'t, 'm> {
    pub(crate) fn new(segments: &'t [Segment<'m>]) -> Self {
        Self {
            segments,
            indices: vec![0; segments.len()],
            done: false,
        }
    }

    /// Advance the odometer; returns false once every combination was seen.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.segments[pos].substitutions.len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl Iterator for Candidates<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let candidate: String = self
            .segments
            .iter()
            .zip(&self.indices)
            .map(|(seg, &i)| seg.substitutions[i].as_str())
            .collect();
        self.done = !self.advance();
        Some(candidate)
    }
}

/// Expand a tokenization into all of its candidates.
pub fn expand<'t, 'm>(tokenization: &'t Tokenization<'m>) -> Candidates<'t, 'm> {
    tokenization.candidates()
}
