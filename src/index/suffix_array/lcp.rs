//! Longest common prefix (LCP) arrays.

use super::types::SuffixArray;

impl<T: Eq> SuffixArray<'_, T> {
    /// LCP array by the linear-time algorithm of Kasai et al.
    ///
    /// `lcp[i]` is the longest common prefix of the suffixes ranked `i` and
    /// `i + 1`, so the array has `n - 1` entries (none for `n <= 1`).
    pub fn lcp(&self) -> Vec<usize> {
        kasai(self.text, &self.sa, &self.inverse())
    }
}

/// Walks the suffixes in text order. Going from suffix `i` to `i + 1` drops
/// one leading symbol, so the LCP with the next-ranked suffix shrinks by at
/// most one; the carried value is only ever extended by direct comparison,
/// which bounds the total extension work by `n`.
pub(super) fn kasai<T: Eq>(text: &[T], sa: &[usize], isa: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0; n.saturating_sub(1)];
    let mut h = 0;

    for i in 0..n {
        let rank = isa[i];
        if rank + 1 == n {
            // The largest suffix has no successor to compare with
            h = 0;
            continue;
        }

        let j = sa[rank + 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }

        lcp[rank] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
