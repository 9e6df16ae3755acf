//! Logging bootstrap for the export binary.

// crates.io
use tracing_subscriber::EnvFilter;

/// Initializes a stderr fmt subscriber, env-filtered with an `info` default.
///
/// `RUST_LOG` overrides the default filter. Logs go to stderr so the output
/// file and any shell redirection of stdout stay clean.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
