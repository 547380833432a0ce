use std::collections::HashSet;
use std::fmt;

use bitvec::prelude::*;

use super::{format_bits, BitPattern, CodingError, Frequencies, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub(super) symbol: Symbol,
    pub(super) pattern: BitPattern,
}

impl TableEntry {
    pub fn new(symbol: Symbol, pattern: BitPattern) -> Self {
        Self { symbol, pattern }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn pattern(&self) -> &BitSlice<u8, Msb0> {
        &self.pattern
    }
}

impl From<(Symbol, BitPattern)> for TableEntry {
    fn from(value: (Symbol, BitPattern)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Symbol to bit pattern assignments, in a fixed order.
///
/// Tables built by [`super::build_table`] are prefix-free and sorted by
/// symbol. Tables received from elsewhere keep the order they were given in,
/// which is the order the decoder prefers entries in when more than one
/// pattern matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTable {
    entries: Vec<TableEntry>,
}

impl HuffmanTable {
    pub(super) fn from_sorted_entries(entries: Vec<TableEntry>) -> Self {
        Self { entries }
    }

    /// Restores a table that was persisted or transmitted next to its
    /// encoded stream.
    pub fn from_entries<I>(entries: I) -> Result<Self, CodingError>
    where
        I: IntoIterator,
        I::Item: Into<TableEntry>,
    {
        let entries: Vec<TableEntry> = entries.into_iter().map(Into::into).collect();
        Self::validate_entries(&entries)?;
        Ok(Self { entries })
    }

    fn validate_entries(entries: &[TableEntry]) -> Result<(), CodingError> {
        if entries.is_empty() {
            return Err(CodingError::InvalidInput("table has no entries"));
        }
        if entries.iter().any(|e| e.pattern.is_empty()) {
            return Err(CodingError::InvalidInput("table contains an empty bit pattern"));
        }
        let mut seen = HashSet::with_capacity(entries.len());
        if !entries.iter().all(|e| seen.insert(e.symbol)) {
            return Err(CodingError::InvalidInput("table contains a symbol twice"));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }

    pub fn get(&self, symbol: Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(TableEntry::pattern)
    }

    /// No pattern is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        // after lexicographic sorting a prefix sits right before one of its extensions
        let mut patterns: Vec<&BitSlice<u8, Msb0>> = self.iter().map(TableEntry::pattern).collect();
        patterns.sort();
        patterns
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Length of the stream produced by encoding data with these counts.
    /// Symbols without a table entry are not counted.
    pub fn total_encoded_bits(&self, frequencies: &Frequencies) -> usize {
        self.iter()
            .filter_map(|e| frequencies.get(&e.symbol).map(|w| w * e.pattern.len()))
            .sum()
    }
}

impl<'a> IntoIterator for &'a HuffmanTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for HuffmanTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self {
            writeln!(f, "{}: {}", entry.symbol, format_bits(&entry.pattern))?;
        }
        Ok(())
    }
}
