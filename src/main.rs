//! Binary entry point: one fetch-and-export unit of work per invocation.

// std
use std::process;
// crates.io
use clap::Parser;
// self
use roomalyzer_export::{
	cli::Cli,
	client::ApiClient,
	config::{Config, DEFAULT_CONFIG_PATH},
	error::Result,
	export, logging,
};

fn main() {
	logging::init();

	let cli = Cli::parse();

	if let Err(e) = run(&cli) {
		tracing::error!(error = ?e, "Export failed.");
		process::exit(1);
	}
}

fn run(cli: &Cli) -> Result<()> {
	let config = Config::load(DEFAULT_CONFIG_PATH)?;
	let client = ApiClient::new()?;
	let envelope = client.fetch_sensor_data(&config)?;
	let rows = export::flatten(envelope.data);

	export::write_csv(&cli.output, &rows)?;

	tracing::info!(
		path = %cli.output.display(),
		readings = rows.len() - 1,
		"Wrote sensor readings."
	);

	Ok(())
}
