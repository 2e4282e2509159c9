//! Huffman tree construction, encoding, and decoding.
//!
//! Nodes live in a flat arena addressed by index. Leaves occupy the first
//! slots in ascending symbol order; internal nodes are appended as they are
//! merged, so the root is always the last node.

use std::fmt;

use log::{debug, trace};

use crate::bits::BitString;
use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::pqueue::MinHeap;
use crate::{HuffError, HuffResult, Symbol};

pub use crate::pqueue::TieBreak;

/// Options controlling tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// Order among equal-weight nodes in the priority queue. The default
    /// (`Fifo`) prefers leaves over merged nodes, giving minimum-variance
    /// code lengths.
    pub tie_break: TieBreak,
}

/// A node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    /// `left` and `right` index into the owning tree's arena.
    Internal {
        weight: u64,
        left: usize,
        right: usize,
    },
}

impl<S> Node<S> {
    /// Frequency weight of this node (or subtree).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A full binary prefix tree built from symbol frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S: Symbol> {
    nodes: Vec<Node<S>>,
    root: usize,
    leaf_count: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build a Huffman tree from input data with default options.
    ///
    /// Returns `None` for empty input.
    pub fn from_data(input: &[S]) -> Option<Self> {
        Self::from_data_with(input, BuildOptions::default())
    }

    pub fn from_data_with(input: &[S], options: BuildOptions) -> Option<Self> {
        let freq = FrequencyTable::from_symbols(input.iter().cloned());
        Self::from_frequency_table_with(&freq, options)
    }

    /// Build a Huffman tree from a pre-computed frequency table.
    pub fn from_frequency_table(freq: &FrequencyTable<S>) -> Option<Self> {
        Self::from_frequency_table_with(freq, BuildOptions::default())
    }

    /// Build a Huffman tree by repeatedly merging the two lightest nodes.
    ///
    /// The first node popped becomes the left child, the second the right.
    /// A table with a single symbol yields a lone leaf root.
    pub fn from_frequency_table_with(
        freq: &FrequencyTable<S>,
        options: BuildOptions,
    ) -> Option<Self> {
        if freq.is_empty() {
            return None;
        }

        let leaf_count = freq.len();
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap: MinHeap<usize> = MinHeap::with_tie_break(options.tie_break);
        for (symbol, weight) in freq.iter() {
            heap.push(weight, nodes.len());
            nodes.push(Node::Leaf {
                symbol: symbol.clone(),
                weight,
            });
        }

        while heap.len() > 1 {
            let (left_weight, left) = heap.pop()?;
            let (right_weight, right) = heap.pop()?;

            let weight = left_weight + right_weight;
            trace!(
                "merge nodes {} ({}) + {} ({}) -> {} ({})",
                left,
                left_weight,
                right,
                right_weight,
                nodes.len(),
                weight
            );
            heap.push(weight, nodes.len());
            nodes.push(Node::Internal {
                weight,
                left,
                right,
            });
        }

        let (_, root) = heap.pop()?;
        let tree = HuffmanTree {
            nodes,
            root,
            leaf_count,
        };
        debug!(
            "built huffman tree: {} symbols, {} nodes, weight {}, max code length {}",
            tree.leaf_count,
            tree.nodes.len(),
            tree.weight(),
            tree.max_code_length()
        );
        Some(tree)
    }

    pub fn root(&self) -> &Node<S> {
        &self.nodes[self.root]
    }

    pub fn root_index(&self) -> usize {
        self.root
    }

    /// All nodes of the arena; child indices refer into this slice.
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Number of distinct symbols in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Total weight, i.e. the length of the input the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root().weight()
    }

    /// True when the alphabet has a single symbol.
    pub fn is_single_leaf(&self) -> bool {
        self.root().is_leaf()
    }

    /// Length of the longest code. A lone leaf has a one-bit code.
    pub fn max_code_length(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            match self.nodes[idx] {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        max.max(1)
    }

    /// Derive the code table for this tree.
    pub fn code_table(&self) -> CodeTable<S> {
        CodeTable::from_tree(Some(self))
    }

    /// Encode symbols against this tree.
    ///
    /// Fails with [`HuffError::UnknownSymbol`] if a symbol is not a leaf.
    pub fn encode(&self, input: &[S]) -> HuffResult<BitString> {
        self.code_table().encode(input)
    }

    /// Decode a bit-string by walking the tree: left on 0, right on 1,
    /// emitting a symbol and returning to the root at each leaf.
    pub fn decode(&self, bits: &BitString) -> HuffResult<Vec<S>> {
        // Lone leaf: every symbol was written as a single 0 bit.
        if let Node::Leaf { symbol, .. } = self.root() {
            return bits
                .iter()
                .enumerate()
                .map(|(position, bit)| {
                    if bit {
                        Err(HuffError::InvalidBitSequence { position })
                    } else {
                        Ok(symbol.clone())
                    }
                })
                .collect();
        }

        let mut output = Vec::new();
        let mut node_idx = self.root;

        for (position, bit) in bits.iter().enumerate() {
            let next = match self.nodes[node_idx] {
                Node::Internal { left, right, .. } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf { .. } => return Err(HuffError::InvalidBitSequence { position }),
            };

            match &self.nodes[next] {
                Node::Leaf { symbol, .. } => {
                    output.push(symbol.clone());
                    node_idx = self.root;
                }
                Node::Internal { .. } => node_idx = next,
            }
        }

        if node_idx != self.root {
            return Err(HuffError::TruncatedCode {
                consumed: bits.len(),
            });
        }

        trace!("decoded {} bits into {} symbols", bits.len(), output.len());
        Ok(output)
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        idx: usize,
        depth: usize,
        label: &str,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match &self.nodes[idx] {
            Node::Leaf { symbol, weight } => {
                writeln!(f, "{}{}Leaf {:?} [weight: {}]", indent, label, symbol, weight)
            }
            Node::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{}{}Internal [weight: {}]", indent, label, weight)?;
                self.fmt_node(f, *left, depth + 1, "0: ")?;
                self.fmt_node(f, *right, depth + 1, "1: ")
            }
        }
    }
}

/// Prints the tree structure, one node per line, children indented under
/// their parent and labelled with the bit that selects them.
impl<S: Symbol> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0, "")
    }
}
