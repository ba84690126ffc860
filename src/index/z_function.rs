//! Z-function and the searches derived from it.
//!
//! `z[i]` is the length of the longest common prefix of `s` and `s[i..]`.
//! The array is computed in O(n) by reusing the rightmost Z-box found so far.
//! `z[0]` is always 0.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Compute the Z-array of `s`.
pub fn z_function<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];

    // Rightmost Z-box seen so far, as the half-open window [left, right)
    let mut left = 0;
    let mut right = 0;

    for i in 1..n {
        let mut len = if i < right {
            z[i - left].min(right - i)
        } else {
            0
        };

        while i + len < n && s[len] == s[i + len] {
            len += 1;
        }
        z[i] = len;

        // Only replace the box when it reaches strictly further right
        if i + len > right {
            left = i;
            right = i + len;
        }
    }

    z
}

/// Find every start position of `pattern` in `text`.
///
/// Runs the Z-function over `pattern + separator + text`. The separator must
/// not occur in either input, otherwise matches may straddle it; callers are
/// responsible for picking one. An empty pattern, or one longer than the
/// text, yields no matches.
pub fn find_occurrences(text: &[u8], pattern: &[u8], separator: u8) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let mut joined = Vec::with_capacity(m + 1 + text.len());
    joined.extend_from_slice(pattern);
    joined.push(separator);
    joined.extend_from_slice(text);

    let z = z_function(&joined);
    z.iter()
        .enumerate()
        .skip(m + 1)
        .filter(|&(_, &len)| len == m)
        .map(|(i, _)| i - m - 1)
        .collect()
}

/// Z-array of `left ++ [sentinel] ++ right` where the sentinel compares
/// unequal to every symbol, so no match can cross it.
fn z_function_joined(left: &[u8], right: &[u8]) -> Vec<usize> {
    let joined: Vec<Option<u8>> = left
        .iter()
        .copied()
        .map(Some)
        .chain(std::iter::once(None))
        .chain(right.iter().copied().map(Some))
        .collect();
    z_function(&joined)
}

/// Knuth–Morris–Pratt prefix function: `p[i]` is the length of the longest
/// proper prefix of `s[..=i]` that is also its suffix.
pub fn prefix_function<T: Eq>(s: &[T]) -> Vec<usize> {
    let mut p = vec![0; s.len()];
    for i in 1..s.len() {
        let mut j = p[i - 1];
        while j > 0 && s[i] != s[j] {
            j = p[j - 1];
        }
        if s[i] == s[j] {
            j += 1;
        }
        p[i] = j;
    }
    p
}

/// Convert a Z-array into the prefix function of the same string.
///
/// Each Z-box `[i, i + z[i])` fills the still-unset prefix function entries it
/// covers, right to left, stopping at the first entry an earlier box already
/// set.
pub fn prefix_from_z(z: &[usize]) -> Result<Vec<usize>> {
    let n = z.len();
    let mut p = vec![0; n];

    for (i, &len) in z.iter().enumerate().skip(1) {
        if len > n - i {
            return Err(Error::Mismatch(format!(
                "z[{i}] = {len} exceeds the remaining length {}",
                n - i
            )));
        }
        for j in (0..len).rev() {
            if p[i + j] != 0 {
                break;
            }
            p[i + j] = j + 1;
        }
    }

    Ok(p)
}

/// Lexicographically smallest string over `alphabet` whose prefix function
/// is `p`, or `None` if no string has this prefix function.
pub fn string_from_prefix_function(p: &[usize], alphabet: &Alphabet) -> Option<Vec<u8>> {
    let mut s: Vec<u8> = Vec::with_capacity(p.len());

    for (i, &value) in p.iter().enumerate() {
        if value > i {
            return None;
        }
        if value > 0 {
            s.push(s[value - 1]);
            continue;
        }

        // Pick the smallest symbol that extends no border of s[..i]
        let chosen = alphabet.symbols().iter().copied().find(|&candidate| {
            if i == 0 {
                return true;
            }
            let mut j = p[i - 1];
            while j > 0 && s[j] != candidate {
                j = p[j - 1];
            }
            j == 0 && s[0] != candidate
        })?;
        s.push(chosen);
    }

    // Copying from borders is only consistent if the input was a real
    // prefix function
    (prefix_function(&s) == p).then_some(s)
}

/// Length of the longest suffix of `lhs` that is also a prefix of `rhs`.
pub fn max_overlap(lhs: &[u8], rhs: &[u8]) -> usize {
    let window = lhs.len().min(rhs.len());
    if window == 0 {
        return 0;
    }

    let tail = &lhs[lhs.len() - window..];
    let z = z_function_joined(&rhs[..window], tail);
    let offset = window + 1;

    // The first tail position whose Z-box runs to the end gives the longest overlap
    (0..window)
        .find(|&j| z[offset + j] == window - j)
        .map(|j| window - j)
        .unwrap_or(0)
}

/// Glue `words` left to right, overlapping each word with the text built so
/// far as much as possible.
pub fn merge_overlapping<W: AsRef<[u8]>>(words: &[W]) -> Vec<u8> {
    let mut merged: Vec<u8> = Vec::new();
    for word in words {
        let word = word.as_ref();
        let overlap = max_overlap(&merged, word);
        merged.extend_from_slice(&word[overlap..]);
    }
    merged
}

/// Split `t` into the fewest non-empty pieces that are each a prefix of `s`.
///
/// Returns the piece lengths in order, or `None` if `t` cannot be split this
/// way. An empty `t` splits into zero pieces.
pub fn prefix_decomposition(s: &[u8], t: &[u8]) -> Option<Vec<usize>> {
    let n = t.len();
    if n == 0 {
        return Some(Vec::new());
    }

    let z = z_function_joined(s, t);
    let reach = |p: usize| z[s.len() + 1 + p];

    // Every prefix of a match is a match too, so from p any end in
    // (p, p + reach(p)] is one piece away. Reachable ends form an interval and
    // the first position to reach an end is on a shortest path to it.
    let mut parent = vec![usize::MAX; n + 1];
    let mut frontier = 0;
    for p in 0..n {
        if p > frontier {
            break;
        }
        let far = (p + reach(p)).min(n);
        while frontier < far {
            frontier += 1;
            parent[frontier] = p;
        }
    }

    if parent[n] == usize::MAX {
        return None;
    }

    let mut pieces = Vec::new();
    let mut end = n;
    while end > 0 {
        let start = parent[end];
        pieces.push(end - start);
        end = start;
    }
    pieces.reverse();
    Some(pieces)
}
