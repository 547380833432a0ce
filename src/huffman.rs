use std::collections::BTreeMap;
use std::fmt::{self, Display};

use bitvec::prelude::*;

pub mod decoder;
pub mod encoder;
pub mod table;
pub mod tree;

pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use table::{HuffmanTable, TableEntry};
pub use tree::build_table;

/// Symbols are arbitrary integers, not bytes.
pub type Symbol = i64;
pub type Weight = usize;

/// Logical sequence of bits, most significant bit first when viewed as bytes.
pub type BitPattern = BitVec<u8, Msb0>;
pub type Frequencies = BTreeMap<Symbol, Weight>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    InvalidInput(&'static str),
    UnknownSymbol(Symbol),
    InvalidEncoding { position: usize },
}

impl Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol '{}' has no entry in the Huffman table", symbol)
            }
            Self::InvalidEncoding { position } => write!(
                f,
                "No table entry matches the encoded bits at position {}",
                position
            ),
        }
    }
}

impl std::error::Error for CodingError {}

pub fn count_frequencies(data: &[Symbol]) -> Frequencies {
    let mut frequencies = Frequencies::new();
    for &symbol in data {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

pub fn encode_with_table(table: &HuffmanTable, data: &[Symbol]) -> Result<BitPattern, CodingError> {
    HuffmanEncoder::new(table).encode_sequence(data)
}

/// Counts `data`, builds a table from the counts and encodes `data` with it.
pub fn encode(data: &[Symbol]) -> Result<(HuffmanTable, BitPattern), CodingError> {
    let frequencies = count_frequencies(data);
    let table = build_table(&frequencies)?;
    let bits = encode_with_table(&table, data)?;
    Ok((table, bits))
}

pub fn decode(table: &HuffmanTable, bits: &BitSlice<u8, Msb0>) -> Result<Vec<Symbol>, CodingError> {
    HuffmanDecoder::new(table).decode_sequence(bits)
}

/// Parses a string of '0' and '1' characters.
pub fn parse_bits(text: &str) -> Result<BitPattern, CodingError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(CodingError::InvalidEncoding { position }),
        })
        .collect()
}

pub fn format_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
