//! Logical bit-strings.
//!
//! Codes and encoded output are sequences of binary digits. They display
//! and parse as text made of `'0'` and `'1'`, and can optionally be packed
//! MSB-first into bytes.

use std::fmt;
use std::str::FromStr;

use crate::{HuffError, HuffResult};

/// A sequence of binary digits, one `bool` per bit (`true` = 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a prefix of `other` (every string is a prefix of itself).
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Pack bits MSB-first into bytes.
    ///
    /// Returns `(bytes, bit_len)`; trailing bits of the last byte are zero.
    pub fn to_bytes(&self) -> (Vec<u8>, usize) {
        let mut output = vec![0u8; self.bits.len().div_ceil(8)];
        for (bit_pos, _) in self.bits.iter().enumerate().filter(|&(_, &b)| b) {
            output[bit_pos / 8] |= 1 << (7 - (bit_pos % 8));
        }
        (output, self.bits.len())
    }

    /// Unpack the first `bit_len` bits of an MSB-first buffer.
    pub fn from_bytes(input: &[u8], bit_len: usize) -> HuffResult<Self> {
        let available = input.len() * 8;
        if bit_len > available {
            return Err(HuffError::PackedLengthMismatch { bit_len, available });
        }
        let bits = (0..bit_len)
            .map(|bit_pos| (input[bit_pos / 8] >> (7 - (bit_pos % 8))) & 1 == 1)
            .collect();
        Ok(BitString { bits })
    }
}

impl FromStr for BitString {
    type Err = HuffError;

    fn from_str(text: &str) -> HuffResult<Self> {
        text.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(HuffError::MalformedBit { position, found }),
            })
            .collect::<HuffResult<Vec<bool>>>()
            .map(|bits| BitString { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        BitString { bits }
    }
}
