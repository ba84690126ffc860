//! Suffix array indexing module
//!
//! This module provides suffix array construction by prefix doubling, the
//! Kasai LCP array, and the substring census queries built on both.
//!
//! ## Architecture
//!
//! - `builder`: Constructs suffix arrays (sequential or rayon-parallel sort)
//! - `lcp`: Linear-time LCP array derivation
//! - `queries`: Distinct and common substring queries
//! - `types`: Core type definitions

pub mod builder;
pub mod lcp;
pub mod queries;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use queries::kth_common_substring;
pub use types::{SuffixArray, SuffixArrayConfig};
