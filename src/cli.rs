//! Command-line surface for the export binary.

// crates.io
use clap::Parser;
// self
use crate::_prelude::*;

/// Export Roomalyzer sensor readings to a CSV file.
///
/// No subcommands; the tool performs exactly one unit of work per invocation
/// and terminates. Any failure is fatal and exits non-zero.
#[derive(Debug, Parser)]
#[command(name = "roomalyzer-export", version, about)]
pub struct Cli {
	/// Path of the CSV file to write.
	#[arg(short, long, default_value = "output.csv")]
	pub output: PathBuf,
}

#[cfg(test)]
mod tests {
	// crates.io
	use clap::CommandFactory;
	// self
	use super::*;

	#[test]
	fn verify_cli() {
		Cli::command().debug_assert();
	}

	#[test]
	fn output_defaults_and_overrides() {
		let cli = Cli::parse_from(["roomalyzer-export"]);

		assert_eq!(cli.output, PathBuf::from("output.csv"));

		let cli = Cli::parse_from(["roomalyzer-export", "-o", "readings.csv"]);

		assert_eq!(cli.output, PathBuf::from("readings.csv"));
	}
}
