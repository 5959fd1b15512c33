//! Fixed-width word value used by every counting strategy.
//!
//! A `CompactWord` holds at most [`WORD_CAPACITY`] lowercase ASCII bytes packed
//! into eight bytes, so comparing or hashing a word is a single `u64` operation
//! and never touches the heap. Longer words are truncated; two words sharing the
//! first eight characters count as the same word.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of bytes a word can hold before truncation
pub const WORD_CAPACITY: usize = 8;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactWord([u8; WORD_CAPACITY]);

impl CompactWord {
    /// The all-zero word. Readers return it once their source is exhausted.
    pub const EMPTY: CompactWord = CompactWord([0; WORD_CAPACITY]);

    /// Build a word from the first (at most) eight bytes of `chars`.
    ///
    /// Bytes past the capacity are ignored; an empty slice yields [`CompactWord::EMPTY`].
    pub fn from_chars(chars: &[u8]) -> Self {
        let mut bytes = [0u8; WORD_CAPACITY];
        let len = chars.len().min(WORD_CAPACITY);
        bytes[..len].copy_from_slice(&chars[..len]);
        CompactWord(bytes)
    }

    pub const fn from_bytes(bytes: [u8; WORD_CAPACITY]) -> Self {
        CompactWord(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.as_u64() == 0
    }

    /// Big-endian integer view of the packed bytes.
    ///
    /// Big-endian keeps integer order identical to byte-lexicographic order on
    /// every host, regardless of native endianness.
    pub const fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; WORD_CAPACITY] {
        &self.0
    }

    /// Significant bytes: everything before the first zero byte
    pub fn chars(&self) -> &[u8] {
        let len = self.len();
        &self.0[..len]
    }

    pub fn len(&self) -> usize {
        self.0
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(WORD_CAPACITY)
    }
}

impl PartialOrd for CompactWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CompactWord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

impl Hash for CompactWord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // One write of the full word, no length prefix like `[u8; N]` would add.
        state.write_u64(u64::from_le_bytes(self.0));
    }
}

impl fmt::Display for CompactWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Readers only ever store a..z, anything else is shown lossily.
        f.write_str(&String::from_utf8_lossy(self.chars()))
    }
}

impl fmt::Debug for CompactWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactWord({:?})", self.to_string())
    }
}

impl From<&str> for CompactWord {
    fn from(word: &str) -> Self {
        CompactWord::from_chars(word.as_bytes())
    }
}
