//! Tokenizers turning raw bytes into [`CompactWord`]s.
//!
//! A word is a maximal run of bytes in `a..=z`. Every other byte separates
//! words, and runs of separators never produce empty words. Characters past the
//! eighth in a run are consumed but not stored.
//!
//! Readers are fail-soft: a source that cannot be opened behaves as an already
//! exhausted source, so a benchmark run over it still completes.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{trace, warn};

use crate::compact_word::{CompactWord, WORD_CAPACITY};
use crate::error::{BenchError, Result};

/// Source of words for a counting strategy.
pub trait WordReader {
    /// Next word of the source, or [`CompactWord::EMPTY`] once the source is exhausted.
    ///
    /// A returned word is never empty while input remains.
    fn next_word(&mut self) -> CompactWord;

    /// Iterate over the remaining words
    fn words(&mut self) -> Words<'_, Self>
    where
        Self: Sized,
    {
        Words { reader: self }
    }
}

/// Iterator adapter returned by [`WordReader::words`]
pub struct Words<'a, R> {
    reader: &'a mut R,
}

impl<R: WordReader> Iterator for Words<'_, R> {
    type Item = CompactWord;

    fn next(&mut self) -> Option<CompactWord> {
        let word = self.reader.next_word();
        (!word.is_empty()).then_some(word)
    }
}

/// Accumulates the bytes of the run currently being scanned.
#[derive(Default)]
struct WordBuilder {
    chars: [u8; WORD_CAPACITY],
    len: usize,
}

impl WordBuilder {
    /// Feed one byte, returning the finished word when `byte` closes a non-empty run.
    #[inline]
    fn push(&mut self, byte: u8) -> Option<CompactWord> {
        if byte.is_ascii_lowercase() {
            if self.len < WORD_CAPACITY {
                self.chars[self.len] = byte;
                self.len += 1;
            }
            None
        } else if self.len > 0 {
            Some(self.take())
        } else {
            None
        }
    }

    /// End of input: the pending run, or the empty word if there is none.
    #[inline]
    fn finish(&mut self) -> CompactWord {
        self.take()
    }

    fn take(&mut self) -> CompactWord {
        let word = CompactWord::from_bytes(self.chars);
        *self = WordBuilder::default();
        word
    }
}

/// Reader over a source loaded entirely into memory.
#[derive(Debug, Default)]
pub struct MemoryWordReader {
    bytes: Vec<u8>,
    pos: usize,
}

impl MemoryWordReader {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        MemoryWordReader {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    /// Load the whole file, or fall back to an exhausted reader if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::try_open(path).unwrap_or_else(|e| {
            warn!(error = %e, "input unreadable, counting an empty source");
            Self::default()
        })
    }

    pub fn try_open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BenchError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), bytes = bytes.len(), "loaded input");
        Ok(Self::from_bytes(bytes))
    }

    /// Bytes not yet scanned
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl WordReader for MemoryWordReader {
    fn next_word(&mut self) -> CompactWord {
        let mut word = WordBuilder::default();
        while let Some(&byte) = self.bytes.get(self.pos) {
            self.pos += 1;
            if let Some(done) = word.push(byte) {
                return done;
            }
        }
        word.finish()
    }
}

/// Reader pulling one byte at a time from a buffered stream.
pub struct StreamWordReader<R> {
    bytes: Option<io::Bytes<BufReader<R>>>,
}

impl StreamWordReader<File> {
    /// Open the file for streaming, or fall back to an exhausted reader.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::try_open(path).unwrap_or_else(|e| {
            warn!(error = %e, "input unreadable, counting an empty source");
            Self::exhausted()
        })
    }

    pub fn try_open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BenchError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> StreamWordReader<R> {
    pub fn from_reader(reader: R) -> Self {
        StreamWordReader {
            bytes: Some(BufReader::new(reader).bytes()),
        }
    }

    pub fn exhausted() -> Self {
        StreamWordReader { bytes: None }
    }

    pub fn is_exhausted(&self) -> bool {
        self.bytes.is_none()
    }
}

impl<R: Read> WordReader for StreamWordReader<R> {
    fn next_word(&mut self) -> CompactWord {
        let mut word = WordBuilder::default();
        let Some(bytes) = self.bytes.as_mut() else {
            return word.finish();
        };
        loop {
            match bytes.next() {
                Some(Ok(byte)) => {
                    if let Some(done) = word.push(byte) {
                        return done;
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "read failed, ending input early");
                    break;
                }
                None => break,
            }
        }
        self.bytes = None;
        word.finish()
    }
}

/// How the harness loads the input for each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Read the whole file into memory before tokenizing
    #[default]
    Whole,
    /// Tokenize straight from a buffered file stream
    Stream,
}

/// Concrete reader handed to strategy entry points.
pub enum WordSource {
    Memory(MemoryWordReader),
    Stream(StreamWordReader<File>),
}

impl WordSource {
    pub fn open(path: impl AsRef<Path>, mode: ReadMode) -> Self {
        match mode {
            ReadMode::Whole => WordSource::Memory(MemoryWordReader::open(path)),
            ReadMode::Stream => WordSource::Stream(StreamWordReader::open(path)),
        }
    }
}

impl WordReader for WordSource {
    #[inline]
    fn next_word(&mut self) -> CompactWord {
        match self {
            WordSource::Memory(reader) => reader.next_word(),
            WordSource::Stream(reader) => reader.next_word(),
        }
    }
}
