//! Error types shared by every index structure.

use thiserror::Error;

/// Errors raised while building an index from caller-supplied input.
///
/// All of these are structural: the input has the wrong shape for the
/// structure being built. A failed construction never leaves a partially
/// usable structure behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte that is not part of the configured alphabet
    #[error("symbol {symbol:#04x} at position {position} is outside the alphabet")]
    InvalidSymbol { symbol: u8, position: usize },

    /// Alphabets hold between 1 and 256 symbols
    #[error("alphabet size {0} is out of range (expected 1..=256)")]
    InvalidAlphabet(usize),

    /// A derived array (Z-array, prefix function) that no string can produce
    #[error("inconsistent input: {0}")]
    Mismatch(String),
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
