use std::collections::HashMap;

use bitvec::prelude::*;

use super::{BitPattern, CodingError, HuffmanTable, Symbol};

pub struct HuffmanEncoder<'a> {
    code_word_lookup_table: HashMap<Symbol, &'a BitSlice<u8, Msb0>>,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a HuffmanTable) -> Self {
        let code_word_lookup_table = table.iter().map(|e| (e.symbol(), e.pattern())).collect();
        HuffmanEncoder {
            code_word_lookup_table,
        }
    }

    fn get_code_word_for_symbol(&self, symbol: Symbol) -> Result<&'a BitSlice<u8, Msb0>, CodingError> {
        self.code_word_lookup_table
            .get(&symbol)
            .copied()
            .ok_or(CodingError::UnknownSymbol(symbol))
    }

    /// Concatenates the patterns of all symbols in `data`. Nothing is
    /// returned if any symbol is missing from the table.
    pub fn encode_sequence(&self, data: &[Symbol]) -> Result<BitPattern, CodingError> {
        let mut output = BitPattern::new();
        for &symbol in data {
            output.extend_from_bitslice(self.get_code_word_for_symbol(symbol)?);
        }
        log::debug!(
            "Encoded {} symbols into {} bits",
            data.len(),
            output.len()
        );
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanEncoder;
    use crate::huffman::{format_bits, parse_bits, CodingError, HuffmanTable, TableEntry};

    fn create_test_table() -> HuffmanTable {
        HuffmanTable::from_entries([
            TableEntry::new(1, parse_bits("0").unwrap()),
            TableEntry::new(2, parse_bits("10").unwrap()),
            TableEntry::new(3, parse_bits("110").unwrap()),
            TableEntry::new(4, parse_bits("111").unwrap()),
        ])
        .unwrap()
    }

    #[test]
    fn test_coder_encode() {
        let table = create_test_table();
        let encoder = HuffmanEncoder::new(&table);
        let bits = encoder.encode_sequence(&[1, 3, 2, 2, 4, 1]).unwrap();
        assert_eq!(format_bits(&bits), "011010101110");
    }

    #[test]
    fn test_encode_empty_sequence() {
        let table = create_test_table();
        let bits = HuffmanEncoder::new(&table).encode_sequence(&[]).unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn test_unknown_symbol() {
        let table = create_test_table();
        let result = HuffmanEncoder::new(&table).encode_sequence(&[1, 2, 5, 3]);
        assert_eq!(result, Err(CodingError::UnknownSymbol(5)));
    }
}
