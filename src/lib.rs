use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{decode, encode, HuffmanTable, Symbol};

mod cli;
mod error;
pub mod huffman;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    samples: usize,
    dominant_symbol: Symbol,
    dominant_share: u8,
    max_symbol: Symbol,
    baseline_width: usize,
    seed: Option<u64>,
    print_table: bool,
}

impl Arguments {
    pub fn print_table(&self) -> bool {
        self.print_table
    }
}

pub struct RoundTripReport {
    pub table: HuffmanTable,
    pub samples: usize,
    pub encoded_bits: usize,
    pub baseline_bits: usize,
}

impl RoundTripReport {
    /// Encoded size relative to the fixed width baseline, in percent.
    pub fn compression_ratio(&self) -> f64 {
        if self.baseline_bits == 0 {
            return 0.0;
        }
        100.0 * self.encoded_bits as f64 / self.baseline_bits as f64
    }

    pub fn bits_per_symbol(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.samples as f64
    }
}

fn create_generator(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn generate_samples(arguments: &Arguments) -> Vec<Symbol> {
    let mut rng = create_generator(arguments.seed);
    (0..arguments.samples)
        .map(|_| {
            if rng.gen_range(0..100) < arguments.dominant_share {
                arguments.dominant_symbol
            } else {
                rng.gen_range(0..=arguments.max_symbol)
            }
        })
        .collect()
}

fn verify_round_trip(original: &[Symbol], decoded: &[Symbol]) -> Result<()> {
    if original.len() != decoded.len() {
        return Err(Error::RoundTripLengthMismatch {
            expected: original.len(),
            actual: decoded.len(),
        });
    }
    match original.iter().zip(decoded).position(|(a, b)| a != b) {
        Some(index) => Err(Error::RoundTripMismatch {
            index,
            expected: original[index],
            actual: decoded[index],
        }),
        None => Ok(()),
    }
}

/// Encodes a generated sample, decodes it again and checks that nothing
/// changed on the way.
pub fn run_round_trip(arguments: &Arguments) -> Result<RoundTripReport> {
    let data = generate_samples(arguments);
    log::info!(
        "Generated {} samples, {}% of them {}",
        data.len(),
        arguments.dominant_share,
        arguments.dominant_symbol
    );
    let (table, bits) = encode(&data)?;
    log::info!("Huffman table holds {} symbols", table.len());
    let decoded = decode(&table, &bits)?;
    verify_round_trip(&data, &decoded)?;
    Ok(RoundTripReport {
        table,
        samples: data.len(),
        encoded_bits: bits.len(),
        baseline_bits: data.len() * arguments.baseline_width,
    })
}

#[cfg(test)]
mod test {
    use super::{generate_samples, run_round_trip, verify_round_trip, Arguments, Error};

    fn create_test_arguments(samples: usize, dominant_share: u8) -> Arguments {
        Arguments {
            samples,
            dominant_symbol: 10,
            dominant_share,
            max_symbol: 65536,
            baseline_width: 16,
            seed: Some(1234),
            print_table: false,
        }
    }

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let arguments = create_test_arguments(100, 70);
        assert_eq!(generate_samples(&arguments), generate_samples(&arguments));
    }

    #[test]
    fn test_full_share_yields_single_symbol() {
        let arguments = create_test_arguments(50, 100);
        assert!(generate_samples(&arguments).iter().all(|&s| s == 10));
        let report = run_round_trip(&arguments).unwrap();
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.encoded_bits, 50);
    }

    #[test]
    fn test_round_trip_beats_baseline() {
        let report = run_round_trip(&create_test_arguments(5000, 70)).unwrap();
        assert_eq!(report.samples, 5000);
        assert_eq!(report.baseline_bits, 5000 * 16);
        assert!(
            report.compression_ratio() < 100.0,
            "Compression ratio {} not below baseline",
            report.compression_ratio()
        );
        assert!(report.bits_per_symbol() < 16.0);
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        let result = run_round_trip(&create_test_arguments(0, 70));
        assert!(matches!(result, Err(Error::Coding(_))));
    }

    #[test]
    fn test_verify_round_trip_reports_first_difference() {
        assert!(verify_round_trip(&[1, 2, 3], &[1, 2, 3]).is_ok());
        assert!(matches!(
            verify_round_trip(&[1, 2, 3, 4], &[1, 5, 3, 6]),
            Err(Error::RoundTripMismatch {
                index: 1,
                expected: 2,
                actual: 5
            })
        ));
        assert!(matches!(
            verify_round_trip(&[1, 2, 3], &[1, 2]),
            Err(Error::RoundTripLengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }
}
