//! Frequency analysis for symbol sequences.
//!
//! Counts the occurrence of each distinct symbol in an input sequence
//! and computes Shannon entropy.

use std::collections::BTreeMap;

use crate::{HuffError, HuffResult, Symbol};

/// A frequency table mapping each distinct symbol to its occurrence count.
///
/// Every stored count is at least 1. Iteration is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Create a new, empty frequency table.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Count symbol frequencies in a sequence.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        table.count(symbols);
        table
    }

    /// Build a table from precomputed `(symbol, count)` pairs.
    ///
    /// Zero counts are dropped and repeated symbols are summed. Fails with
    /// [`HuffError::CountOverflow`] if the total exceeds `u64::MAX`.
    pub fn from_counts<I>(counts: I) -> HuffResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::new();
        for (symbol, count) in counts {
            if count == 0 {
                continue;
            }
            // Every per-symbol count is bounded by the total.
            table.total = table
                .total
                .checked_add(count)
                .ok_or(HuffError::CountOverflow)?;
            *table.counts.entry(symbol).or_insert(0) += count;
        }
        Ok(table)
    }

    fn count<I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
    {
        for symbol in symbols {
            *self.counts.entry(symbol).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Get the count for a symbol, 0 if it never occurred.
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// Compute the Shannon entropy of the distribution (in bits per symbol).
    ///
    /// Returns 0.0 if the table is empty.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .values()
            .map(|&c| {
                let prob = c as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

/// Convenience function: compute a frequency table from a slice.
pub fn get_frequency<S: Symbol>(input: &[S]) -> FrequencyTable<S> {
    FrequencyTable::from_symbols(input.iter().cloned())
}
