//! # strix - String Indexing Toolkit
//!
//! Classic linear and near-linear string indexing structures over bounded
//! alphabets, with a small command-line front end.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The indexing structures (Z-function, suffix array, suffix
//!   automaton, generalized suffix tree, Aho–Corasick)
//! - [`alphabet`] - Symbol to index mapping and presets
//! - [`error`] - Library error type
//! - [`output`] - Result formatting for the CLI
//! - [`utils`] - Configuration and input loading
//!
//! ## Quick Start
//!
//! ```
//! use strix::index::{SuffixArrayBuilder, SuffixAutomaton};
//! use strix::index::z_function::find_occurrences;
//!
//! assert_eq!(find_occurrences(b"aabaa", b"aa", b'#'), vec![0, 3]);
//!
//! let sa = SuffixArrayBuilder::with_defaults().build(b"banana");
//! assert_eq!(sa.as_slice(), &[5, 3, 1, 0, 4, 2]);
//! assert_eq!(sa.lcp(), vec![1, 3, 0, 0, 2]);
//!
//! assert_eq!(SuffixAutomaton::substring_counts(b"aaa"), vec![1, 2, 3]);
//! ```
//!
//! ## Errors
//!
//! Builders reject symbols outside their alphabet with
//! [`Error::InvalidSymbol`]; streaming matchers reset to the root instead.

pub mod alphabet;
pub mod error;
pub mod index;
pub mod output;
pub mod utils;

pub use alphabet::{Alphabet, AlphabetPreset};
pub use error::{Error, Result};
