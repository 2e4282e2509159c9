//! Whole-input encode and decode.
//!
//! The free functions take and return every artifact explicitly: `encode`
//! hands back the bits together with the tree and code table it built, and
//! `decode` takes the tree to walk. [`Codec`] keeps the most recent tree for
//! callers that want the encode-then-decode pair as a single owned value.

use log::debug;

use crate::bits::BitString;
use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::{BuildOptions, HuffmanTree};
use crate::{HuffError, HuffResult, Symbol};

/// Everything one encode call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding<S: Symbol> {
    /// Concatenated codes of the input, in input order.
    pub bits: BitString,
    /// `None` when the input was empty.
    pub tree: Option<HuffmanTree<S>>,
    pub table: CodeTable<S>,
}

/// Encode a symbol sequence with default build options.
pub fn encode<S: Symbol>(input: &[S]) -> Encoding<S> {
    encode_with(input, BuildOptions::default())
}

/// Count frequencies, build the tree and code table, and concatenate each
/// symbol's code.
pub fn encode_with<S: Symbol>(input: &[S], options: BuildOptions) -> Encoding<S> {
    let freq = FrequencyTable::from_symbols(input.iter().cloned());
    let tree = HuffmanTree::from_frequency_table_with(&freq, options);
    let table = CodeTable::from_tree(tree.as_ref());

    let bits = match table.encode(input) {
        Ok(bits) => bits,
        Err(e) => unreachable!("code table built from this input rejected it: {}", e),
    };
    debug!(
        "encoded {} symbols ({} distinct) into {} bits",
        input.len(),
        freq.len(),
        bits.len()
    );

    Encoding { bits, tree, table }
}

/// Encode the characters of `text`.
pub fn encode_str(text: &str) -> Encoding<char> {
    let symbols: Vec<char> = text.chars().collect();
    encode(&symbols)
}

/// Decode `bits` against `tree`.
///
/// Empty input decodes to an empty sequence even without a tree.
pub fn decode<S: Symbol>(bits: &BitString, tree: Option<&HuffmanTree<S>>) -> HuffResult<Vec<S>> {
    if bits.is_empty() {
        return Ok(Vec::new());
    }
    tree.ok_or(HuffError::NoTree)?.decode(bits)
}

/// Parse `encoded` as `'0'`/`'1'` text and decode it into a string.
pub fn decode_str(encoded: &str, tree: Option<&HuffmanTree<char>>) -> HuffResult<String> {
    let bits: BitString = encoded.parse()?;
    Ok(decode(&bits, tree)?.into_iter().collect())
}

/// An encoder/decoder session that retains the tree from its last encode.
///
/// Each `encode` replaces the retained tree and code table; `decode` walks
/// whichever tree is current.
#[derive(Debug, Clone)]
pub struct Codec<S: Symbol> {
    options: BuildOptions,
    tree: Option<HuffmanTree<S>>,
    table: CodeTable<S>,
}

impl<S: Symbol> Codec<S> {
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Codec {
            options,
            tree: None,
            table: CodeTable::default(),
        }
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Encode `input`, retaining its tree and code table.
    pub fn encode(&mut self, input: &[S]) -> BitString {
        let Encoding { bits, tree, table } = encode_with(input, self.options);
        self.tree = tree;
        self.table = table;
        bits
    }

    /// Decode against the tree retained by the last `encode`.
    pub fn decode(&self, bits: &BitString) -> HuffResult<Vec<S>> {
        decode(bits, self.tree.as_ref())
    }

    pub fn tree(&self) -> Option<&HuffmanTree<S>> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }
}

impl Codec<char> {
    /// Encode the characters of `text` and render the bits as text.
    pub fn encode_str(&mut self, text: &str) -> String {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols).to_string()
    }

    pub fn decode_str(&self, encoded: &str) -> HuffResult<String> {
        decode_str(encoded, self.tree.as_ref())
    }
}

impl<S: Symbol> Default for Codec<S> {
    fn default() -> Self {
        Self::new()
    }
}
