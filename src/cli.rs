use crate::huffman::Symbol;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, ArgAction,
    ArgMatches, Command,
};
use std::ffi::OsString;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_samples_argument(command);
        let command = Self::register_dominant_symbol_argument(command);
        let command = Self::register_dominant_share_argument(command);
        let command = Self::register_max_symbol_argument(command);
        let command = Self::register_baseline_width_argument(command);
        let command = Self::register_seed_argument(command);
        Self::register_print_table_argument(command)
    }

    fn register_samples_argument(command: Command) -> Command {
        command.arg(
            arg!(samples: -n --samples <SAMPLES> "Number of symbols to generate")
                .default_value("5000")
                .value_parser(value_parser!(usize)),
        )
    }

    fn register_dominant_symbol_argument(command: Command) -> Command {
        command.arg(
            arg!(dominant_symbol: -d --dominant_symbol <SYMBOL> "Symbol that dominates the sample")
                .default_value("10")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(Symbol)),
        )
    }

    fn register_dominant_share_argument(command: Command) -> Command {
        command.arg(
            arg!(dominant_share: -s --dominant_share <PERCENT> "Share of the dominant symbol in percent")
                .default_value("70")
                .value_parser(value_parser!(u8).range(0..=100)),
        )
    }

    fn register_max_symbol_argument(command: Command) -> Command {
        command.arg(
            arg!(max_symbol: -m --max_symbol <SYMBOL> "Largest value of the uniformly drawn symbols")
                .default_value("65536")
                .value_parser(value_parser!(Symbol).range(0..)),
        )
    }

    fn register_baseline_width_argument(command: Command) -> Command {
        command.arg(
            arg!(baseline_width: -w --baseline_width <BITS> "Fixed width in bits to compare against")
                .default_value("16")
                .value_parser(value_parser!(usize)),
        )
    }

    fn register_seed_argument(command: Command) -> Command {
        command.arg(
            arg!(seed: --seed <SEED> "Seed for the sample generator")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
    }

    fn register_print_table_argument(command: Command) -> Command {
        command.arg(
            arg!(print_table: --print_table "Print the Huffman table").action(ArgAction::SetTrue),
        )
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            samples: Self::extract_samples_argument(matches),
            dominant_symbol: Self::extract_dominant_symbol_argument(matches),
            dominant_share: Self::extract_dominant_share_argument(matches),
            max_symbol: Self::extract_max_symbol_argument(matches),
            baseline_width: Self::extract_baseline_width_argument(matches),
            seed: Self::extract_seed_argument(matches),
            print_table: Self::extract_print_table_argument(matches),
        }
    }

    fn extract_samples_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("samples")
            .expect("Number of samples must be provided, but was unset.")
            .to_owned()
    }

    fn extract_dominant_symbol_argument(matches: &ArgMatches) -> Symbol {
        matches
            .get_one::<Symbol>("dominant_symbol")
            .expect("Dominant symbol must be provided, but was unset.")
            .to_owned()
    }

    fn extract_dominant_share_argument(matches: &ArgMatches) -> u8 {
        matches
            .get_one::<u8>("dominant_share")
            .expect("Dominant share must be provided, but was unset.")
            .to_owned()
    }

    fn extract_max_symbol_argument(matches: &ArgMatches) -> Symbol {
        matches
            .get_one::<Symbol>("max_symbol")
            .expect("Max symbol must be provided, but was unset.")
            .to_owned()
    }

    fn extract_baseline_width_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("baseline_width")
            .expect("Baseline width must be provided, but was unset.")
            .to_owned()
    }

    fn extract_seed_argument(matches: &ArgMatches) -> Option<u64> {
        matches.get_one::<u64>("seed").copied()
    }

    fn extract_print_table_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_table")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
