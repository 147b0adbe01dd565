//! Alphabet configuration.
//!
//! A [`TrieConfig`] fixes the set of characters a trie accepts and maps each
//! of them to a dense child-slot index. Translation is all-or-nothing: a
//! string containing a single unsupported character has no mapping at all.
//!
//! ```
//! use oid_filter::{Alphabet, TrieConfig};
//!
//! let config = TrieConfig::oid();
//! assert_eq!(config.translate(".1"), Some(vec![10, 1]));
//! assert_eq!(config.translate(".1.x"), None);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Characters accepted by [`TrieConfig::oid`].
pub const OID_ALPHABET: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

/// Largest accepted base offset. Every trie node allocates `offset` reserved slots.
pub const MAX_OFFSET: usize = 1024;

/// Contract between a trie and its alphabet.
pub trait Alphabet {
    /// Translate every character of `chars` to its child-slot index.
    ///
    /// Returns `None` if any character is outside the alphabet. Every
    /// returned index is strictly below [`Alphabet::slot_count`].
    fn translate(&self, chars: &str) -> Option<Vec<usize>>;

    /// Number of child slots each trie node carries.
    fn slot_count(&self) -> usize;
}

impl<A: Alphabet + ?Sized> Alphabet for &A {
    fn translate(&self, chars: &str) -> Option<Vec<usize>> {
        (**self).translate(chars)
    }

    fn slot_count(&self) -> usize {
        (**self).slot_count()
    }
}

impl<A: Alphabet + ?Sized> Alphabet for Arc<A> {
    fn translate(&self, chars: &str) -> Option<Vec<usize>> {
        (**self).translate(chars)
    }

    fn slot_count(&self) -> usize {
        (**self).slot_count()
    }
}

/// Serialized form: `{"alphabet": "0123456789.", "offset": 0}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawConfig {
    alphabet: String,
    #[serde(default)]
    offset: usize,
}

/// Fixed alphabet with a base offset applied to every translated index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct TrieConfig {
    alphabet: Vec<char>,
    offset: usize,
    /// Rank of each ASCII character in `alphabet`
    ascii: [Option<u32>; 128],
    /// Rank of each non-ASCII character in `alphabet`
    other: HashMap<char, u32>,
}

impl TrieConfig {
    /// Create a config accepting exactly the characters of `alphabet`, with offset 0.
    pub fn new(alphabet: &[char]) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(FilterError::ConfigError("Alphabet is empty".to_string()));
        }

        let mut ascii = [None; 128];
        let mut other = HashMap::new();

        for (rank, &c) in alphabet.iter().enumerate() {
            let rank = u32::try_from(rank)
                .map_err(|_| FilterError::ConfigError("Alphabet is too large".to_string()))?;
            let previous = if c.is_ascii() {
                ascii[c as usize].replace(rank)
            } else {
                other.insert(c, rank)
            };
            if previous.is_some() {
                return Err(FilterError::ConfigError(format!(
                    "Duplicate character in alphabet: {:?}",
                    c
                )));
            }
        }

        Ok(Self {
            alphabet: alphabet.to_vec(),
            offset: 0,
            ascii,
            other,
        })
    }

    /// Alphabet of dotted numeric identifiers: digits and `.`.
    pub fn oid() -> Self {
        let mut ascii = [None; 128];
        for (rank, &c) in OID_ALPHABET.iter().enumerate() {
            ascii[c as usize] = Some(rank as u32);
        }
        Self {
            alphabet: OID_ALPHABET.to_vec(),
            offset: 0,
            ascii,
            other: HashMap::new(),
        }
    }

    /// Load a config from JSON, e.g. `{"alphabet": "0123456789.", "offset": 2}`.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| FilterError::ConfigError(format!("Invalid config JSON: {}", e)))
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Set the base offset.
    ///
    /// Fails with [`FilterError::ConfigError`] if `offset` exceeds [`MAX_OFFSET`].
    pub fn with_offset(mut self, offset: usize) -> Result<Self> {
        if offset > MAX_OFFSET || offset.checked_add(self.alphabet.len()).is_none() {
            return Err(FilterError::ConfigError(format!(
                "Offset {} exceeds maximum ({})",
                offset, MAX_OFFSET
            )));
        }
        self.offset = offset;
        Ok(self)
    }

    /// Base offset added to every translated index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of accepted characters.
    pub fn cardinality(&self) -> usize {
        self.alphabet.len()
    }

    /// Accepted characters, in index order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Check whether a single character is accepted.
    pub fn accepts(&self, c: char) -> bool {
        self.rank(c).is_some()
    }

    #[inline]
    fn rank(&self, c: char) -> Option<u32> {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.other.get(&c).copied()
        }
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::oid()
    }
}

impl Alphabet for TrieConfig {
    fn translate(&self, chars: &str) -> Option<Vec<usize>> {
        chars
            .chars()
            .map(|c| self.rank(c).map(|rank| self.offset + rank as usize))
            .collect()
    }

    fn slot_count(&self) -> usize {
        self.offset + self.alphabet.len()
    }
}

impl TryFrom<RawConfig> for TrieConfig {
    type Error = FilterError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let alphabet: Vec<char> = raw.alphabet.chars().collect();
        Self::new(&alphabet)?.with_offset(raw.offset)
    }
}

impl From<TrieConfig> for RawConfig {
    fn from(config: TrieConfig) -> Self {
        Self {
            alphabet: config.alphabet.into_iter().collect(),
            offset: config.offset,
        }
    }
}
