//! Substring census queries answered with a suffix array and its LCP array.

use super::builder::SuffixArrayBuilder;
use super::types::SuffixArray;
use std::iter;

impl<T: Eq> SuffixArray<'_, T> {
    /// Number of distinct non-empty substrings of the text.
    ///
    /// Each suffix contributes its prefixes that are not shared with the
    /// previous suffix in sorted order.
    pub fn distinct_substrings(&self) -> u64 {
        let n = self.text.len() as u64;
        let total: u64 = self.sa.iter().map(|&start| n - start as u64).sum();
        let shared: u64 = self.lcp().iter().map(|&l| l as u64).sum();
        total - shared
    }
}

/// Which input a suffix of `s $ t #` starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// The `k`-th (1-based) lexicographically smallest distinct string that
/// occurs in both `s` and `t`, or `None` if there are fewer than `k`.
///
/// Works on the suffix array of `s $ t #`. Symbols are lifted into `u16` so
/// both separators sort below every byte and can never collide with input.
pub fn kth_common_substring(
    builder: &SuffixArrayBuilder,
    s: &[u8],
    t: &[u8],
    k: u64,
) -> Option<Vec<u8>> {
    if k == 0 {
        return None;
    }

    const FIRST_END: u16 = 1;
    const SECOND_END: u16 = 0;
    let lift = |&b: &u8| b as u16 + 2;

    let joined: Vec<u16> = s
        .iter()
        .map(lift)
        .chain(iter::once(FIRST_END))
        .chain(t.iter().map(lift))
        .chain(iter::once(SECOND_END))
        .collect();

    let sa = builder.build(&joined);
    let lcp = sa.lcp();
    let order = sa.as_slice();
    let n = order.len();

    let side: Vec<Option<Side>> = order
        .iter()
        .map(|&start| match start.cmp(&s.len()) {
            std::cmp::Ordering::Less => Some(Side::First),
            std::cmp::Ordering::Greater => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        })
        .collect();

    // common[i]: longest prefix of suffix i shared with any suffix from the
    // other input. The nearest such suffix on each side wins, with the LCP
    // to it being the running minimum of the LCP values in between.
    let mut common = vec![0usize; n];
    let mut since: [Option<usize>; 2] = [None, None];
    for i in 0..n {
        if i > 0 {
            for run in since.iter_mut().flatten() {
                *run = (*run).min(lcp[i - 1]);
            }
        }
        if let Some(side) = side[i] {
            common[i] = since[side.other().index()].unwrap_or(0);
            since[side.index()] = Some(usize::MAX);
        }
    }

    let mut since: [Option<usize>; 2] = [None, None];
    for i in (0..n).rev() {
        if i + 1 < n {
            for run in since.iter_mut().flatten() {
                *run = (*run).min(lcp[i]);
            }
        }
        if let Some(side) = side[i] {
            let right = since[side.other().index()].unwrap_or(0);
            common[i] = common[i].max(right);
            since[side.index()] = Some(usize::MAX);
        }
    }

    // Prefixes of suffix i longer than its LCP with the previous suffix are
    // new strings, and they come in lexicographic order
    let mut seen = 0u64;
    for i in 0..n {
        let shared = if i == 0 { 0 } else { lcp[i - 1] };
        let fresh = common[i].saturating_sub(shared) as u64;
        if fresh == 0 {
            continue;
        }
        if seen + fresh >= k {
            let len = shared + (k - seen) as usize;
            let start = order[i];
            return Some(joined[start..start + len].iter().map(|&c| (c - 2) as u8).collect());
        }
        seen += fresh;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn substrings(text: &[u8]) -> BTreeSet<Vec<u8>> {
        let mut set = BTreeSet::new();
        for i in 0..text.len() {
            for j in i + 1..=text.len() {
                set.insert(text[i..j].to_vec());
            }
        }
        set
    }

    #[test]
    fn test_distinct_substrings() {
        let builder = SuffixArrayBuilder::with_defaults();
        assert_eq!(builder.build(b"banana").distinct_substrings(), 15);
        assert_eq!(builder.build(b"aaa").distinct_substrings(), 3);
        assert_eq!(builder.build(b"abc").distinct_substrings(), 6);
        assert_eq!(builder.build::<u8>(b"").distinct_substrings(), 0);
    }

    #[test]
    fn test_distinct_substrings_brute_force() {
        let builder = SuffixArrayBuilder::with_defaults();
        for text in [&b"abracadabra"[..], b"mississippi", b"aabbaabb"] {
            assert_eq!(
                builder.build(text).distinct_substrings(),
                substrings(text).len() as u64
            );
        }
    }

    #[test]
    fn test_kth_common_substring() {
        let builder = SuffixArrayBuilder::with_defaults();
        let s = b"abab";
        let t = b"bab";
        // a, ab, b, ba, bab
        assert_eq!(kth_common_substring(&builder, s, t, 1), Some(b"a".to_vec()));
        assert_eq!(kth_common_substring(&builder, s, t, 2), Some(b"ab".to_vec()));
        assert_eq!(kth_common_substring(&builder, s, t, 3), Some(b"b".to_vec()));
        assert_eq!(kth_common_substring(&builder, s, t, 5), Some(b"bab".to_vec()));
        assert_eq!(kth_common_substring(&builder, s, t, 6), None);
        assert_eq!(kth_common_substring(&builder, s, t, 0), None);
    }

    #[test]
    fn test_kth_common_substring_brute_force() {
        let builder = SuffixArrayBuilder::with_defaults();
        let cases: [(&[u8], &[u8]); 4] = [
            (b"abcab", b"cabca"),
            (b"aaaa", b"aa"),
            (b"xyz", b"abc"),
            (b"abacaba", b"bacab"),
        ];
        for (s, t) in cases {
            let expected: Vec<Vec<u8>> = substrings(s)
                .intersection(&substrings(t))
                .cloned()
                .collect();
            for (k, want) in expected.iter().enumerate() {
                assert_eq!(
                    kth_common_substring(&builder, s, t, k as u64 + 1).as_ref(),
                    Some(want)
                );
            }
            assert_eq!(
                kth_common_substring(&builder, s, t, expected.len() as u64 + 1),
                None
            );
        }
    }
}
