use serde::{Deserialize, Serialize};

/// One instruction word and the address it was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub address: u32,
    pub raw: u32,
}

/// Iterates a byte buffer as consecutive little-endian 32-bit words.
///
/// A trailing 1-3 byte remainder is never yielded; [`WordStream::remainder`]
/// reports its length.
#[derive(Debug, Clone)]
pub struct WordStream<'a> {
    bytes: &'a [u8],
    off: usize,
    address: u32,
}

impl<'a> WordStream<'a> {
    pub fn new(bytes: &'a [u8], base: u32) -> Self {
        Self {
            bytes,
            off: 0,
            address: base,
        }
    }

    pub fn remainder(&self) -> usize {
        self.bytes.len() % 4
    }

    fn load_le_u32(&self, off: usize) -> Option<u32> {
        let b = self.bytes.get(off..off + 4)?;
        Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

impl Iterator for WordStream<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let raw = self.load_le_u32(self.off)?;
        let word = Word {
            address: self.address,
            raw,
        };
        self.off += 4;
        self.address = self.address.wrapping_add(4);
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.bytes.len() - self.off) / 4;
        (n, Some(n))
    }
}

impl ExactSizeIterator for WordStream<'_> {}
