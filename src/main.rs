use std::env::args_os;

use huffman_codec::{run_round_trip, CLIParser};

mod logger;

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_round_trip(&arguments) {
        Ok(report) => {
            if arguments.print_table() {
                print!("{}", report.table);
            }
            println!(
                "Round trip successful: {} symbols, {} distinct, {} bits ({:.2} bits/symbol)",
                report.samples,
                report.table.len(),
                report.encoded_bits,
                report.bits_per_symbol()
            );
            println!("Compression ratio: {:5.2}%", report.compression_ratio());
        }
        Err(e) => eprintln!("Round trip failed because of: {}", e),
    }
}
