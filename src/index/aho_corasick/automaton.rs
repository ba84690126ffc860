//! Failure links and streaming transitions

use super::{Match, Node, NodeId, PatternId, ROOT};
use crate::alphabet::Alphabet;
use std::collections::VecDeque;
use std::mem;

/// Aho–Corasick automaton over a fixed alphabet.
///
/// Transitions are memoized on first use, so querying takes `&mut self`.
#[derive(Debug, Clone)]
pub struct AhoCorasick {
    alphabet: Alphabet,
    nodes: Vec<Node>,
    pattern_lens: Vec<usize>,
    /// Failure chain awaiting memoization in `go`
    scratch: Vec<NodeId>,
}

impl AhoCorasick {
    pub(super) fn from_trie(alphabet: Alphabet, nodes: Vec<Node>, pattern_lens: Vec<usize>) -> Self {
        let mut automaton = Self {
            alphabet,
            nodes,
            pattern_lens,
            scratch: Vec::new(),
        };
        automaton.assign_links();
        automaton
    }

    /// Breadth-first: every node on a failure chain is shallower than the
    /// node being linked, so its own links are already final.
    fn assign_links(&mut self) {
        self.nodes[ROOT].fail = ROOT;
        self.nodes[ROOT].dangerous = self.nodes[ROOT].is_terminal();

        let mut queue = VecDeque::new();
        queue.push_back(ROOT);

        while let Some(parent) = queue.pop_front() {
            for symbol in 0..self.alphabet.len() {
                let Some(child) = self.nodes[parent].children[symbol] else {
                    continue;
                };

                let fail = if parent == ROOT {
                    ROOT
                } else {
                    let parent_fail = self.nodes[parent].fail;
                    self.go(parent_fail, symbol)
                };

                let target = &self.nodes[fail];
                let output = if target.is_terminal() {
                    Some(fail)
                } else {
                    target.output
                };
                let dangerous = target.dangerous;

                let node = &mut self.nodes[child];
                node.fail = fail;
                node.output = output;
                node.dangerous = node.is_terminal() || dangerous;
                queue.push_back(child);
            }
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of trie nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Length of pattern `id`
    pub fn pattern_len(&self, id: PatternId) -> usize {
        self.pattern_lens[id]
    }

    pub fn fail(&self, node: NodeId) -> NodeId {
        self.nodes[node].fail
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].is_terminal()
    }

    /// Terminal, or reached by a path with a pattern as a suffix
    pub fn is_dangerous(&self, node: NodeId) -> bool {
        self.nodes[node].dangerous
    }

    /// Goto transition on an alphabet index: the trie child if there is one,
    /// else the root's own fallback, else the transition of the failure link.
    ///
    /// Memoizes the result on every node of the failure chain it walked.
    /// An index outside the alphabet resets to the root, as in [`step`].
    ///
    /// [`step`]: AhoCorasick::step
    pub fn go(&mut self, node: NodeId, symbol: usize) -> NodeId {
        if symbol >= self.alphabet.len() {
            return ROOT;
        }

        let mut chain = mem::take(&mut self.scratch);
        let mut current = node;

        let target = loop {
            let state = &self.nodes[current];
            if let Some(target) = state.go[symbol] {
                break target;
            }
            if let Some(child) = state.children[symbol] {
                break child;
            }
            if current == ROOT {
                break ROOT;
            }
            chain.push(current);
            current = state.fail;
        };

        self.nodes[current].go[symbol] = Some(target);
        for id in chain.drain(..) {
            self.nodes[id].go[symbol] = Some(target);
        }
        self.scratch = chain;

        target
    }

    /// Streaming transition on a raw byte; a byte outside the alphabet
    /// resets to the root.
    pub fn step(&mut self, state: NodeId, byte: u8) -> NodeId {
        match self.alphabet.index(byte) {
            Some(symbol) => self.go(state, symbol),
            None => ROOT,
        }
    }

    /// Patterns ending at `state`, nearest first along the output chain
    pub fn matches_at(&self, state: NodeId) -> impl Iterator<Item = PatternId> + '_ {
        let first = if self.nodes[state].is_terminal() {
            Some(state)
        } else {
            self.nodes[state].output
        };
        std::iter::successors(first, |&node| self.nodes[node].output)
            .flat_map(|node| self.nodes[node].patterns.iter().copied())
    }

    /// Stream `text` and call `f` with every occurrence, in order of end
    /// position.
    pub fn for_each_match(&mut self, text: &[u8], mut f: impl FnMut(Match)) {
        // Empty patterns end everywhere, including before the first byte
        for pattern in self.matches_at(ROOT) {
            f(Match { pattern, end: 0 });
        }

        let mut state = ROOT;
        for (i, &byte) in text.iter().enumerate() {
            state = self.step(state, byte);
            for pattern in self.matches_at(state) {
                f(Match { pattern, end: i + 1 });
            }
        }
    }

    /// Every occurrence of every pattern
    pub fn find_all(&mut self, text: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        self.for_each_match(text, |m| matches.push(m));
        matches
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use crate::index::aho_corasick::{AhoCorasickBuilder, Match, ROOT};

    fn automaton(alphabet: Alphabet, patterns: &[&[u8]]) -> super::AhoCorasick {
        let mut builder = AhoCorasickBuilder::new(alphabet);
        for pattern in patterns {
            builder.add_pattern(pattern).unwrap();
        }
        builder.build()
    }

    fn brute_force(patterns: &[&[u8]], text: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        for end in 0..=text.len() {
            for (pattern, p) in patterns.iter().enumerate() {
                if p.len() <= end && &text[end - p.len()..end] == *p {
                    matches.push(Match { pattern, end });
                }
            }
        }
        matches.sort();
        matches
    }

    #[test]
    fn test_classic_example() {
        let patterns: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
        let mut ac = automaton(Alphabet::lowercase(), &patterns);

        let mut found = ac.find_all(b"ushers");
        found.sort();
        assert_eq!(
            found,
            vec![
                Match { pattern: 0, end: 4 },
                Match { pattern: 1, end: 4 },
                Match { pattern: 3, end: 6 },
            ]
        );
    }

    #[test]
    fn test_fail_links() {
        let patterns: [&[u8]; 2] = [b"abab", b"bab"];
        let mut ac = automaton(Alphabet::lowercase(), &patterns);

        // a b a b: walk the trie path of "abab"
        let mut state = ROOT;
        let mut path = Vec::new();
        for &c in b"abab" {
            state = ac.step(state, c);
            path.push(state);
        }
        // "aba" fails to "ba", "abab" fails to "bab"
        assert_eq!(ac.fail(path[0]), ROOT);
        assert!(ac.is_terminal(path[3]));
        assert!(ac.is_terminal(ac.fail(path[3])));
    }

    #[test]
    fn test_matches_brute_force() {
        let patterns: [&[u8]; 5] = [b"a", b"ab", b"bab", b"bc", b"abcab"];
        let mut ac = automaton(Alphabet::lowercase(), &patterns);
        for text in [&b"abcabcab"[..], b"babababc", b"cccc", b""] {
            let mut found = ac.find_all(text);
            found.sort();
            assert_eq!(found, brute_force(&patterns, text));
        }
    }

    #[test]
    fn test_invalid_byte_resets() {
        let patterns: [&[u8]; 1] = [b"ab"];
        let mut ac = automaton(Alphabet::lowercase(), &patterns);
        assert!(ac.find_all(b"a-b").is_empty());
        assert_eq!(ac.find_all(b"a-ab"), vec![Match { pattern: 0, end: 4 }]);
        assert_eq!(ac.step(ROOT, b'Z'), ROOT);
    }

    #[test]
    fn test_duplicate_and_empty_patterns() {
        let patterns: [&[u8]; 3] = [b"", b"aa", b"aa"];
        let mut ac = automaton(Alphabet::lowercase(), &patterns);
        let mut found = ac.find_all(b"aaa");
        found.sort();
        assert_eq!(found, brute_force(&patterns, b"aaa"));
        assert!(ac.is_dangerous(ROOT));
    }

    #[test]
    fn test_go_is_total() {
        let patterns: [&[u8]; 2] = [b"0110", b"11"];
        let mut ac = automaton(Alphabet::binary(), &patterns);
        for node in 0..ac.node_count() {
            for symbol in 0..2 {
                assert!(ac.go(node, symbol) < ac.node_count());
            }
        }
    }

    #[test]
    fn test_go_outside_alphabet_resets() {
        let patterns: [&[u8]; 1] = [b"01"];
        let mut ac = automaton(Alphabet::binary(), &patterns);
        let zero = ac.go(ROOT, 0);
        assert_ne!(zero, ROOT);
        assert_eq!(ac.go(zero, 2), ROOT);
        assert_eq!(ac.go(zero, usize::MAX), ROOT);

        // Memoized transitions are unaffected
        let one = ac.go(zero, 1);
        assert!(ac.is_terminal(one));
    }
}
