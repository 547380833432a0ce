use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::table::{HuffmanTable, TableEntry};
use super::{BitPattern, CodingError, Frequencies, Weight};

/// A partial tree: its total weight and every leaf below it.
///
/// Leaf patterns are grown at the end while merging, so they hold the path
/// from leaf to root and have to be reversed once the root is reached.
struct Subtree {
    weight: Weight,
    sequence: usize,
    entries: Vec<TableEntry>,
}

impl Ord for Subtree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Subtree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Subtree {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Subtree {}

impl Subtree {
    fn append_bit(mut self, bit: bool) -> Self {
        for entry in self.entries.iter_mut() {
            entry.pattern.push(bit);
        }
        self
    }
}

/// Builds a Huffman table by repeatedly merging the two lightest subtrees.
///
/// Ties on weight go to the subtree created first; leaves are created in
/// ascending symbol order. Zero weights are kept as given. A single symbol
/// is assigned the pattern `0` so that every occurrence still costs one bit.
pub fn build_table(frequencies: &Frequencies) -> Result<HuffmanTable, CodingError> {
    let mut heap: BinaryHeap<Reverse<Subtree>> = frequencies
        .iter()
        .enumerate()
        .map(|(sequence, (&symbol, &weight))| {
            Reverse(Subtree {
                weight,
                sequence,
                entries: vec![TableEntry::new(symbol, BitPattern::new())],
            })
        })
        .collect();
    let mut next_sequence = heap.len();

    let mut root = None;
    while let Some(Reverse(lo)) = heap.pop() {
        let Some(Reverse(hi)) = heap.pop() else {
            root = Some(lo);
            break;
        };
        let weight = lo
            .weight
            .checked_add(hi.weight)
            .ok_or(CodingError::InvalidInput("total weight overflows"))?;
        let lo = lo.append_bit(false);
        let hi = hi.append_bit(true);
        let mut entries = lo.entries;
        entries.extend(hi.entries);
        heap.push(Reverse(Subtree {
            weight,
            sequence: next_sequence,
            entries,
        }));
        next_sequence += 1;
    }

    let root = root.ok_or(CodingError::InvalidInput("frequency table is empty"))?;
    let mut entries = root.entries;
    if let [single] = entries.as_mut_slice() {
        log::debug!("Single symbol {} gets a one bit pattern", single.symbol());
        single.pattern.push(false);
    }
    for entry in entries.iter_mut() {
        entry.pattern.reverse();
    }
    entries.sort_by(|a, b| {
        a.symbol()
            .cmp(&b.symbol())
            .then(a.pattern().len().cmp(&b.pattern().len()))
    });
    log::debug!("Built Huffman table for {} symbols", entries.len());
    Ok(HuffmanTable::from_sorted_entries(entries))
}
