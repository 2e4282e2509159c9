//! Classical Huffman coding over arbitrary symbol alphabets.
//!
//! The pipeline is frequency counting, greedy tree construction through a
//! min-heap, code table derivation by tree traversal, and encode/decode.
//! Encoded output is a logical [`BitString`], not a packed byte stream.
//!
//! ```
//! let encoding = huffcode::encode_str("Hello, World!");
//! let decoded = huffcode::decode_str(&encoding.bits.to_string(), encoding.tree.as_ref()).unwrap();
//! assert_eq!(decoded, "Hello, World!");
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod frequency;
pub mod pqueue;
pub mod tree;

#[cfg(test)]
mod validation;

pub use bits::BitString;
pub use code::CodeTable;
pub use codec::{decode, decode_str, encode, encode_str, encode_with, Codec, Encoding};
pub use frequency::FrequencyTable;
pub use tree::{BuildOptions, HuffmanTree, Node, TieBreak};

use std::fmt::Debug;

/// An atomic unit of the input alphabet.
///
/// Ordering is needed for deterministic tie-breaking and for the
/// ordered iteration of frequency and code tables.
pub trait Symbol: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Symbol for T {}

/// Error types for huffcode operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HuffError {
    /// A bit-string contained something other than `'0'` or `'1'`.
    #[error("malformed bit-string: {found:?} at position {position}")]
    MalformedBit { position: usize, found: char },
    /// Decode was attempted on non-empty input without a tree.
    #[error("decode attempted with no tree available")]
    NoTree,
    /// A bit led off the tree; the input was not produced by this tree.
    #[error("decode traversal encountered invalid bit sequence for current tree at bit {position}")]
    InvalidBitSequence { position: usize },
    /// Input ended in the middle of a code word.
    #[error("bit-string ended inside a code word after {consumed} bits")]
    TruncatedCode { consumed: usize },
    /// A symbol has no code in the tree used for encoding.
    #[error("symbol has no code in this tree")]
    UnknownSymbol,
    /// Unpacking asked for more bits than the buffer holds.
    #[error("requested {bit_len} bits from a buffer holding {available}")]
    PackedLengthMismatch { bit_len: usize, available: usize },
    /// Supplied counts sum past `u64::MAX`.
    #[error("symbol counts overflow a 64-bit total")]
    CountOverflow,
}

pub type HuffResult<T> = Result<T, HuffError>;
