//! Masks with single-symbol wildcards.
//!
//! A mask such as `ab??c?d` is split into its maximal literal runs (`ab` at
//! offset 0, `c` at 4, `d` at 6). Every run hit while streaming the text
//! casts one vote for the window start it implies; a window matches when it
//! collects one vote per run.

use super::automaton::AhoCorasick;
use super::builder::AhoCorasickBuilder;
use crate::alphabet::Alphabet;
use crate::error::Result;

/// A literal run of the mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Position of the run's first symbol in the mask
    pub offset: usize,
    pub literal: Vec<u8>,
}

/// Mask split into literal runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardMask {
    len: usize,
    runs: Vec<Run>,
}

impl WildcardMask {
    pub fn parse(mask: &[u8], wildcard: u8) -> Self {
        let runs = mask
            .split(|&c| c == wildcard)
            .scan(0, |offset, literal| {
                let start = *offset;
                *offset += literal.len() + 1;
                Some(Run {
                    offset: start,
                    literal: literal.to_vec(),
                })
            })
            .filter(|run| !run.literal.is_empty())
            .collect();

        Self {
            len: mask.len(),
            runs,
        }
    }

    /// Length of the whole mask, wildcards included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}

/// Streams texts against one mask
#[derive(Debug, Clone)]
pub struct MaskMatcher {
    automaton: AhoCorasick,
    /// Mask offset of each run, by pattern id
    offsets: Vec<usize>,
    mask_len: usize,
}

impl MaskMatcher {
    /// Fails if a literal symbol of the mask is outside `alphabet`
    pub fn new(mask: &WildcardMask, alphabet: Alphabet) -> Result<Self> {
        let mut builder = AhoCorasickBuilder::new(alphabet);
        let mut offsets = Vec::with_capacity(mask.runs.len());
        for run in &mask.runs {
            builder.add_pattern(&run.literal)?;
            offsets.push(run.offset);
        }

        Ok(Self {
            automaton: builder.build(),
            offsets,
            mask_len: mask.len,
        })
    }

    /// Votes per window start, for starts `0..=text.len()`.
    ///
    /// A run ending at exclusive position `end` starts at `end - len`, which
    /// puts the window at `end - len - offset`; runs too close to the front
    /// for that are ignored.
    pub fn window_counts(&mut self, text: &[u8]) -> Vec<usize> {
        let mut counts = vec![0; text.len() + 1];
        let offsets = &self.offsets;
        let automaton = &mut self.automaton;
        let lens: Vec<usize> = (0..offsets.len()).map(|id| automaton.pattern_len(id)).collect();

        automaton.for_each_match(text, |m| {
            let run_start = m.end - lens[m.pattern];
            if let Some(window) = run_start.checked_sub(offsets[m.pattern]) {
                counts[window] += 1;
            }
        });

        counts
    }

    /// Start positions of every window of `text` matching the mask
    pub fn find(&mut self, text: &[u8]) -> Vec<usize> {
        if self.mask_len > text.len() {
            return Vec::new();
        }

        let counts = self.window_counts(text);
        let runs = self.offsets.len();
        (0..=text.len() - self.mask_len)
            .filter(|&start| counts[start] == runs)
            .collect()
    }
}
