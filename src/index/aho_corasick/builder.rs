//! Pattern trie builder

use super::automaton::AhoCorasick;
use super::{Node, PatternId, ROOT};
use crate::alphabet::Alphabet;
use crate::error::Result;

/// Builder collecting patterns into a trie
#[derive(Debug, Clone)]
pub struct AhoCorasickBuilder {
    alphabet: Alphabet,
    nodes: Vec<Node>,
    pattern_lens: Vec<usize>,
}

impl AhoCorasickBuilder {
    pub fn new(alphabet: Alphabet) -> Self {
        let nodes = vec![Node::new(alphabet.len(), 0)];
        Self {
            alphabet,
            nodes,
            pattern_lens: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of registered patterns
    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Register `pattern` and return its id.
    ///
    /// A pattern with a symbol outside the alphabet is rejected and the trie
    /// is left untouched. Registering the same pattern twice yields two ids
    /// ending at the same node.
    pub fn add_pattern(&mut self, pattern: &[u8]) -> Result<PatternId> {
        let encoded = self.alphabet.encode(pattern)?;

        let mut current = ROOT;
        for (depth, index) in encoded.into_iter().enumerate() {
            current = match self.nodes[current].children[index] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(self.alphabet.len(), depth + 1));
                    self.nodes[current].children[index] = Some(child);
                    child
                }
            };
        }

        let id = self.pattern_lens.len();
        self.nodes[current].patterns.push(id);
        self.pattern_lens.push(pattern.len());
        Ok(id)
    }

    /// Whether `pattern` was registered exactly (not merely as a prefix)
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut current = ROOT;
        for &symbol in pattern {
            let next = self
                .alphabet
                .index(symbol)
                .and_then(|index| self.nodes[current].children[index]);
            match next {
                Some(child) => current = child,
                None => return false,
            }
        }
        self.nodes[current].is_terminal()
    }

    /// Assign failure links and freeze the trie into an automaton
    pub fn build(self) -> AhoCorasick {
        log::debug!(
            "aho-corasick: {} patterns, {} trie nodes",
            self.pattern_lens.len(),
            self.nodes.len()
        );
        AhoCorasick::from_trie(self.alphabet, self.nodes, self.pattern_lens)
    }
}
