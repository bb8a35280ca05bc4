use super::{Address, Word, MODULUS};
use crate::error;
use crate::error::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Word store
///
/// Fixed length once loaded. Words are stored exactly as they appear in
/// the image; values above 32775 only fail when used as operands.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    words: Vec<Word>,
}

impl Memory {
    pub fn from_words(words: Vec<Word>) -> Result<Memory> {
        if words.len() > MODULUS as usize {
            return Err(error!(ProgramTooLarge; &format!("{} WORDS", words.len())));
        }
        Ok(Memory { words })
    }

    /// Decode a little-endian image. A dangling odd byte is dropped.
    pub fn from_bytes(bytes: &[u8]) -> Result<Memory> {
        let words = bytes
            .chunks_exact(2)
            .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Memory::from_words(words)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn read(&self, addr: Address) -> Result<Word> {
        match self.words.get(addr) {
            Some(word) => Ok(*word),
            None => Err(self.bounds_error(addr)),
        }
    }

    pub fn write(&mut self, addr: Address, value: Word) -> Result<()> {
        if addr >= self.words.len() {
            return Err(self.bounds_error(addr));
        }
        self.words[addr] = value;
        Ok(())
    }

    fn bounds_error(&self, addr: Address) -> Error {
        error!(OutOfBounds; &format!("ADDRESS {} OF {}", addr, self.words.len()))
    }
}
