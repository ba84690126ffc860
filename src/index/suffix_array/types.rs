//! Types for suffix array indexing
//!
//! This module defines the suffix array itself and the configuration used to
//! build it.

use serde::{Deserialize, Serialize};

/// Default number of suffixes above which sorting runs on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Configuration for suffix array building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Sort in parallel once the text has more suffixes than this
    /// (default: 100k)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// A suffix array over a borrowed text.
///
/// `as_slice()[i]` is the start of the `i`-th smallest suffix. The inverse
/// suffix array and the LCP array are derived on demand and never stored
/// independently of this permutation.
#[derive(Clone, PartialEq, Eq)]
pub struct SuffixArray<'t, T> {
    pub(super) text: &'t [T],
    pub(super) sa: Vec<usize>,
}

impl<'t, T> SuffixArray<'t, T> {
    /// The indexed text
    pub fn text(&self) -> &'t [T] {
        self.text
    }

    /// Suffix start positions in lexicographic order
    pub fn as_slice(&self) -> &[usize] {
        &self.sa
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.sa
    }

    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Inverse permutation: `inverse()[sa[i]] == i`
    pub fn inverse(&self) -> Vec<usize> {
        let mut isa = vec![0; self.sa.len()];
        for (rank, &start) in self.sa.iter().enumerate() {
            isa[start] = rank;
        }
        isa
    }

    /// Suffix of the text at a given rank
    pub fn suffix(&self, rank: usize) -> &'t [T] {
        &self.text[self.sa[rank]..]
    }

    /// Ensures the suffix array is a permutation that sorts the suffixes,
    /// and panics if it is not.
    ///
    /// Note: This is a **very expensive** operation, with _O(n²)_ worst case
    /// performance.
    pub fn verify(&self)
    where
        T: Ord,
    {
        let n = self.text.len();
        assert_eq!(self.sa.len(), n, "suffix array length differs from text");

        let mut seen = vec![false; n];
        for &start in &self.sa {
            assert!(start < n && !seen[start], "not a permutation: {start}");
            seen[start] = true;
        }

        for pair in self.sa.windows(2) {
            assert!(
                self.text[pair[0]..] < self.text[pair[1]..],
                "suffixes {} and {} out of order",
                pair[0],
                pair[1]
            );
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SuffixArray<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixArray")
            .field("text", &self.text)
            .field("sa", &self.sa)
            .finish()
    }
}
