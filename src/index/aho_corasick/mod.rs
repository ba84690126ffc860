//! Aho–Corasick multi-pattern automaton
//!
//! Patterns are inserted into a trie over a fixed [`Alphabet`]; building
//! assigns failure links breadth-first and turns the trie into a streaming
//! matcher with a lazily memoized goto function.
//!
//! ## Architecture
//!
//! - `builder`: Trie construction and pattern registration
//! - `automaton`: Failure links, goto function, streaming matches
//! - `mask`: Matching masks with single-symbol wildcards
//! - `safety`: Search for an infinite path avoiding every pattern
//!
//! [`Alphabet`]: crate::alphabet::Alphabet

pub mod automaton;
pub mod builder;
pub mod mask;
pub mod safety;

pub use automaton::AhoCorasick;
pub use builder::AhoCorasickBuilder;
pub use mask::{MaskMatcher, WildcardMask};

/// Index of a trie node; the root is always `ROOT`
pub type NodeId = usize;

/// Registration order of a pattern, starting at 0
pub type PatternId = usize;

pub const ROOT: NodeId = 0;

/// One pattern occurrence; the pattern occupies `text[end - len..end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Match {
    pub pattern: PatternId,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Trie children, indexed by alphabet index
    pub(crate) children: Vec<Option<NodeId>>,
    /// Memoized goto transitions
    pub(crate) go: Vec<Option<NodeId>>,
    pub(crate) fail: NodeId,
    /// Nearest terminal node on the failure chain, excluding this one
    pub(crate) output: Option<NodeId>,
    /// Patterns ending exactly here
    pub(crate) patterns: Vec<PatternId>,
    pub(crate) depth: usize,
    /// Terminal, or some suffix of the path is terminal
    pub(crate) dangerous: bool,
}

impl Node {
    pub(crate) fn new(alphabet_len: usize, depth: usize) -> Self {
        Self {
            children: vec![None; alphabet_len],
            go: vec![None; alphabet_len],
            fail: ROOT,
            output: None,
            patterns: Vec::new(),
            depth,
            dangerous: false,
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        !self.patterns.is_empty()
    }
}
