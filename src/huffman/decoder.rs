use bitvec::prelude::*;

use super::{CodingError, HuffmanTable, Symbol};

const ROOT_INDEX: usize = 0;

#[derive(Clone, Copy, Default)]
struct Node {
    children: [Option<usize>; 2],
    // index into the table of the entry whose pattern ends here
    entry: Option<usize>,
}

/// Binary trie over the patterns of a table.
///
/// A lookup follows the input as deep as the trie goes and returns the
/// matching entry with the lowest table index. For a prefix-free table there
/// is at most one match; otherwise this is the first match in table order.
pub struct HuffmanDecoder<'a> {
    table: &'a HuffmanTable,
    nodes: Vec<Node>,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(table: &'a HuffmanTable) -> Self {
        let mut decoder = HuffmanDecoder {
            table,
            nodes: vec![Node::default()],
        };
        for (index, entry) in table.iter().enumerate() {
            decoder.insert(index, entry.pattern());
        }
        decoder
    }

    fn insert(&mut self, index: usize, pattern: &BitSlice<u8, Msb0>) {
        let mut current_index = ROOT_INDEX;
        for bit in pattern.iter().by_vals() {
            current_index = match self.nodes[current_index].children[bit as usize] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current_index].children[bit as usize] = Some(child);
                    child
                }
            };
        }
        self.nodes[current_index].entry.get_or_insert(index);
    }

    /// Returns the table index and pattern length of the entry matching the
    /// start of `bits`.
    fn match_prefix(&self, bits: &BitSlice<u8, Msb0>) -> Option<(usize, usize)> {
        let mut current_index = ROOT_INDEX;
        let mut best: Option<(usize, usize)> = None;
        for (depth, bit) in bits.iter().by_vals().enumerate() {
            match self.nodes[current_index].children[bit as usize] {
                Some(child) => current_index = child,
                None => break,
            }
            if let Some(entry) = self.nodes[current_index].entry {
                if best.map_or(true, |(best_entry, _)| entry < best_entry) {
                    best = Some((entry, depth + 1));
                }
            }
        }
        best
    }

    pub fn decode_sequence(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<Symbol>, CodingError> {
        let entries = self.table.iter().as_slice();
        let mut output = Vec::new();
        let mut position = 0;
        while position < bits.len() {
            let Some((entry, length)) = self.match_prefix(&bits[position..]) else {
                log::warn!(
                    "No table entry matches at bit {} of {}",
                    position,
                    bits.len()
                );
                return Err(CodingError::InvalidEncoding { position });
            };
            output.push(entries[entry].symbol());
            position += length;
        }
        log::debug!("Decoded {} bits into {} symbols", bits.len(), output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanDecoder;
    use crate::huffman::{
        build_table, encode_with_table, parse_bits, CodingError, Frequencies, HuffmanTable,
    };

    fn table_from_text(entries: &[(i64, &str)]) -> HuffmanTable {
        HuffmanTable::from_entries(
            entries
                .iter()
                .map(|&(symbol, bits)| (symbol, parse_bits(bits).unwrap())),
        )
        .unwrap()
    }

    #[test]
    fn test_coder_decode() {
        let table = table_from_text(&[(1, "0"), (2, "10"), (3, "110"), (4, "111")]);
        let decoder = HuffmanDecoder::new(&table);
        let bits = parse_bits("011010101110").unwrap();
        let symbols = decoder.decode_sequence(&bits).unwrap();
        assert_eq!(symbols, [1, 3, 2, 2, 4, 1]);
    }

    #[test]
    fn test_decode_empty_input() {
        let table = table_from_text(&[(1, "0"), (2, "1")]);
        let symbols = HuffmanDecoder::new(&table)
            .decode_sequence(&parse_bits("").unwrap())
            .unwrap();
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_unmatched_bits_are_an_error() {
        let frequencies: Frequencies = [(1, 3), (2, 1), (3, 1)].into_iter().collect();
        let table = build_table(&frequencies).unwrap();
        let mut bits = encode_with_table(&table, &[1, 2]).unwrap();
        let position = bits.len();
        // a dangling prefix of a longer pattern
        bits.push(!table.get(1).unwrap()[0]);
        let result = HuffmanDecoder::new(&table).decode_sequence(&bits);
        assert_eq!(result, Err(CodingError::InvalidEncoding { position }));
    }

    #[test]
    fn test_bits_outside_a_two_bit_alphabet_are_an_error() {
        let table = table_from_text(&[(1, "00"), (2, "01")]);
        let result = HuffmanDecoder::new(&table).decode_sequence(&parse_bits("00011").unwrap());
        assert_eq!(result, Err(CodingError::InvalidEncoding { position: 4 }));
    }

    #[test]
    fn test_first_entry_wins_for_ambiguous_table() {
        let table = table_from_text(&[(1, "01"), (2, "0"), (3, "1")]);
        let decoder = HuffmanDecoder::new(&table);
        let symbols = decoder.decode_sequence(&parse_bits("01001").unwrap()).unwrap();
        assert_eq!(symbols, [1, 2, 1]);

        let table = table_from_text(&[(2, "0"), (1, "01"), (3, "1")]);
        let decoder = HuffmanDecoder::new(&table);
        let symbols = decoder.decode_sequence(&parse_bits("01001").unwrap()).unwrap();
        assert_eq!(symbols, [2, 3, 2, 2, 3]);
    }

    #[test]
    fn test_duplicate_patterns_decode_to_first_symbol() {
        let table = table_from_text(&[(4, "1"), (5, "0"), (6, "1")]);
        let symbols = HuffmanDecoder::new(&table)
            .decode_sequence(&parse_bits("101").unwrap())
            .unwrap();
        assert_eq!(symbols, [4, 5, 4]);
    }
}
