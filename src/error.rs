use std::fmt::Display;

use crate::huffman::{CodingError, Symbol};

#[derive(Debug)]
pub enum Error {
    Coding(CodingError),
    RoundTripLengthMismatch {
        expected: usize,
        actual: usize,
    },
    RoundTripMismatch {
        index: usize,
        expected: Symbol,
        actual: Symbol,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coding(error) => write!(f, "Huffman coding failed: {}", error),
            Self::RoundTripLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Decoded {} symbols, but the original sequence has {}",
                    actual, expected
                )
            }
            Self::RoundTripMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Decoded symbol {} at index {} does not match original symbol {}",
                    actual, index, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CodingError> for Error {
    fn from(value: CodingError) -> Self {
        Self::Coding(value)
    }
}
