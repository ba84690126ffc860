//! String indexing structures
//!
//! Each structure is built once from an immutable input and answers
//! queries afterwards; none depends on another.
//!
//! - [`z_function`] - Z-array, pattern search and prefix-function tools
//! - [`suffix_array`] - Prefix doubling, Kasai LCP, substring census
//! - [`suffix_automaton`] - Online minimal substring automaton
//! - [`suffix_tree`] - Ukkonen tree of two concatenated strings
//! - [`aho_corasick`] - Multi-pattern automaton, masks, safe cycles

pub mod aho_corasick;
pub mod suffix_array;
pub mod suffix_automaton;
pub mod suffix_tree;
pub mod z_function;

pub use aho_corasick::{AhoCorasick, AhoCorasickBuilder, Match, MaskMatcher, WildcardMask};
pub use suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, kth_common_substring};
pub use suffix_automaton::SuffixAutomaton;
pub use suffix_tree::GeneralizedSuffixTree;
