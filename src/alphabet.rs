//! Symbol alphabets.
//!
//! Every structure that stores fixed-width transition tables fixes an
//! [`Alphabet`] at construction time. The alphabet maps raw bytes to dense
//! indices `0..size` and decides which bytes are invalid.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker for bytes that have no index in the lookup table
const NO_INDEX: u16 = u16::MAX;

/// A finite alphabet of byte symbols with a fixed symbol-to-index mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Byte -> index lookup (`NO_INDEX` for bytes outside the alphabet)
    table: Box<[u16; 256]>,
    /// Index -> byte
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Alphabet of `size` consecutive bytes starting at `first`.
    pub fn range(first: u8, size: usize) -> Result<Self> {
        if size == 0 || first as usize + size > 256 {
            return Err(Error::InvalidAlphabet(size));
        }
        let symbols: Vec<u8> = (0..size).map(|i| first + i as u8).collect();
        Self::from_symbols(&symbols)
    }

    /// Alphabet made of the given distinct symbols, indexed in the given order.
    ///
    /// Duplicate symbols keep their first index.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        if symbols.is_empty() || symbols.len() > 256 {
            return Err(Error::InvalidAlphabet(symbols.len()));
        }
        Ok(Self::build(symbols))
    }

    fn build(symbols: &[u8]) -> Self {
        let mut table = Box::new([NO_INDEX; 256]);
        let mut ordered = Vec::with_capacity(symbols.len());
        for &symbol in symbols {
            if table[symbol as usize] == NO_INDEX {
                table[symbol as usize] = ordered.len() as u16;
                ordered.push(symbol);
            }
        }

        Self {
            table,
            symbols: ordered,
        }
    }

    /// `a..=z`
    pub fn lowercase() -> Self {
        Self::build(b"abcdefghijklmnopqrstuvwxyz")
    }

    /// `0` and `1`
    pub fn binary() -> Self {
        Self::build(b"01")
    }

    /// `A`, `C`, `G`, `T`
    pub fn dna() -> Self {
        Self::build(b"ACGT")
    }

    /// Every byte value
    pub fn bytes() -> Self {
        let all: Vec<u8> = (0..=255).collect();
        Self::build(&all)
    }

    /// Number of symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Alphabets are never empty; provided for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Dense index of `symbol`, or `None` if it is not part of the alphabet
    #[inline]
    pub fn index(&self, symbol: u8) -> Option<usize> {
        match self.table[symbol as usize] {
            NO_INDEX => None,
            index => Some(index as usize),
        }
    }

    /// Byte for a dense index
    #[inline]
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// Symbols in index order
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.index(symbol).is_some()
    }

    /// Map a whole sequence to indices, rejecting the first invalid symbol.
    pub fn encode(&self, text: &[u8]) -> Result<Vec<usize>> {
        text.iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.index(symbol)
                    .ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

/// Named alphabet presets as they appear in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetPreset {
    #[default]
    Lowercase,
    Binary,
    Dna,
    Bytes,
}

impl AlphabetPreset {
    pub fn alphabet(self) -> Alphabet {
        match self {
            AlphabetPreset::Lowercase => Alphabet::lowercase(),
            AlphabetPreset::Binary => Alphabet::binary(),
            AlphabetPreset::Dna => Alphabet::dna(),
            AlphabetPreset::Bytes => Alphabet::bytes(),
        }
    }
}

impl FromStr for AlphabetPreset {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "lowercase" => Ok(AlphabetPreset::Lowercase),
            "binary" => Ok(AlphabetPreset::Binary),
            "dna" => Ok(AlphabetPreset::Dna),
            "bytes" => Ok(AlphabetPreset::Bytes),
            other => Err(format!(
                "unknown alphabet '{other}' (expected lowercase, binary, dna or bytes)"
            )),
        }
    }
}
