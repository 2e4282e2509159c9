//! Code tables derived from a Huffman tree.
//!
//! Each symbol's code is its root-to-leaf path with left = 0 and right = 1.
//! Codes are prefix-free because every symbol sits on a leaf.

use std::collections::BTreeMap;

use crate::bits::BitString;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use crate::{HuffError, HuffResult, Symbol};

/// Mapping from symbol to its code, iterated in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive codes for every leaf of `tree`; an absent tree gives an
    /// empty table.
    pub fn from_tree(tree: Option<&HuffmanTree<S>>) -> Self {
        let mut codes = BTreeMap::new();
        if let Some(tree) = tree {
            if let Node::Leaf { symbol, .. } = tree.root() {
                // A lone leaf would otherwise get a zero-length code.
                codes.insert(symbol.clone(), BitString::from(vec![false]));
            } else {
                let mut prefix = BitString::with_capacity(tree.max_code_length());
                Self::generate_codes(tree.nodes(), tree.root_index(), &mut prefix, &mut codes);
            }
        }
        CodeTable { codes }
    }

    /// Recursively assign codes to all leaves under `idx`.
    fn generate_codes(
        nodes: &[Node<S>],
        idx: usize,
        prefix: &mut BitString,
        codes: &mut BTreeMap<S, BitString>,
    ) {
        match &nodes[idx] {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), prefix.clone());
            }
            Node::Internal { left, right, .. } => {
                prefix.push(false);
                Self::generate_codes(nodes, *left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::generate_codes(nodes, *right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// Get the code for a symbol.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.codes.iter()
    }

    /// Concatenate the code of each input symbol in order.
    pub fn encode(&self, input: &[S]) -> HuffResult<BitString> {
        let mut output = BitString::new();
        for symbol in input {
            let code = self.codes.get(symbol).ok_or(HuffError::UnknownSymbol)?;
            output.extend_from(code);
        }
        Ok(output)
    }

    /// Verify that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitString> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Number of bits an input with these frequencies encodes to.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_len(&self, freq: &FrequencyTable<S>) -> u64 {
        freq.iter()
            .filter_map(|(symbol, count)| self.codes.get(symbol).map(|c| c.len() as u64 * count))
            .sum()
    }

    /// Average bits per symbol, weighted by frequency. 0.0 for an empty table.
    pub fn average_code_length(&self, freq: &FrequencyTable<S>) -> f64 {
        if freq.total() == 0 {
            return 0.0;
        }
        self.encoded_len(freq) as f64 / freq.total() as f64
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable {
            codes: BTreeMap::new(),
        }
    }
}
