//! Suffix array builder
//!
//! Builds a suffix array by prefix doubling:
//! 1. Rank every suffix by its first symbol and the symbol after it
//! 2. Sort by `(rank, next_rank)`, re-rank, and double the compared window
//!
//! Each round costs one sort, for O(n log² n) work in total (O(n log n)
//! comparisons per round on the parallel path).

use super::types::*;
use rayon::prelude::*;

/// One suffix during doubling. Field order is the sort order; `None` ranks
/// below every symbol, like the end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Suffix {
    rank: usize,
    next_rank: Option<usize>,
    index: usize,
}

/// Builder for constructing suffix arrays
#[derive(Debug, Clone, Default)]
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array of `text`
    pub fn build<'t, T: Ord>(&self, text: &'t [T]) -> SuffixArray<'t, T> {
        let n = text.len();
        if n == 0 {
            return SuffixArray {
                text,
                sa: Vec::new(),
            };
        }

        // Initial ranks come from the symbol order
        let mut symbols: Vec<&T> = text.iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        let rank_of = |c: &T| symbols.binary_search(&c).unwrap_or_else(|r| r);

        let mut suffixes: Vec<Suffix> = (0..n)
            .map(|i| Suffix {
                rank: rank_of(&text[i]),
                next_rank: text.get(i + 1).map(rank_of),
                index: i,
            })
            .collect();
        self.sort(&mut suffixes);

        // position[i] = where suffix i currently sits in `suffixes`
        let mut position = vec![0; n];
        let mut window = 4;
        let mut rounds = 1;

        while window < 2 * n {
            let mut rank = 0;
            let mut prev = (suffixes[0].rank, suffixes[0].next_rank);
            suffixes[0].rank = 0;
            position[suffixes[0].index] = 0;

            for j in 1..n {
                let key = (suffixes[j].rank, suffixes[j].next_rank);
                if key != prev {
                    rank += 1;
                }
                prev = key;
                suffixes[j].rank = rank;
                position[suffixes[j].index] = j;
            }

            // All prefixes of the current window already differ
            if rank + 1 == n {
                break;
            }

            let half = window / 2;
            for j in 0..n {
                let next = suffixes[j].index + half;
                let next_rank = (next < n).then(|| suffixes[position[next]].rank);
                suffixes[j].next_rank = next_rank;
            }

            self.sort(&mut suffixes);
            window *= 2;
            rounds += 1;
        }

        log::debug!("suffix array: {n} suffixes sorted in {rounds} rounds");

        SuffixArray {
            text,
            sa: suffixes.into_iter().map(|s| s.index).collect(),
        }
    }

    /// Sort by `(rank, next_rank)`, in parallel for large inputs
    fn sort(&self, suffixes: &mut [Suffix]) {
        if suffixes.len() > self.config.parallel_threshold {
            suffixes.par_sort_unstable();
        } else {
            suffixes.sort_unstable();
        }
    }

    pub fn config(&self) -> &SuffixArrayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let sa = SuffixArrayBuilder::with_defaults().build::<u8>(b"");
        assert!(sa.is_empty());
    }

    #[test]
    fn test_simple_text() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"banana");
        assert_eq!(sa.as_slice(), &[5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_suffix_array_with_sentinel() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"banana\x00");

        // 6: \0
        // 5: a\0
        // 3: ana\0
        // 1: anana\0
        // 0: banana\0
        // 4: na\0
        // 2: nana\0
        assert_eq!(sa.as_slice(), &[6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_single_symbol_runs() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"aaaaa");
        assert_eq!(sa.as_slice(), &[4, 3, 2, 1, 0]);

        let sa = SuffixArrayBuilder::with_defaults().build(b"x");
        assert_eq!(sa.as_slice(), &[0]);
    }

    #[test]
    fn test_wikipedia_example() {
        let text = b"immissiissippi";
        let sa = SuffixArrayBuilder::with_defaults().build(text);
        sa.verify();
        assert_eq!(sa.as_slice()[0], 13);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text: Vec<u8> = (0..5000u32).map(|i| b"abc"[(i * i % 7 % 3) as usize]).collect();
        let sequential = SuffixArrayBuilder::with_defaults().build(&text);
        let parallel = SuffixArrayBuilder::new(SuffixArrayConfig {
            parallel_threshold: 0,
        })
        .build(&text);

        assert_eq!(sequential.as_slice(), parallel.as_slice());
        sequential.verify();
    }

    #[test]
    fn test_generic_symbols() {
        let words = ["to", "be", "or", "not", "to", "be"];
        let sa = SuffixArrayBuilder::with_defaults().build(&words);
        sa.verify();
        assert_eq!(sa.as_slice(), &[5, 1, 3, 2, 4, 0]);
    }

    #[test]
    fn test_inverse() {
        let sa = SuffixArrayBuilder::with_defaults().build(b"banana");
        assert_eq!(sa.inverse(), vec![3, 2, 5, 1, 4, 0]);
    }
}
