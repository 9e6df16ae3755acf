//! Exporter-level error types shared across the pipeline.
//!
//! Every failure here is terminal by design: the binary logs the cause and exits
//! non-zero. No variant is retried and no transient/permanent distinction is made.

// self
use crate::_prelude::*;

/// Exporter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical exporter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Configuration file could not be loaded or parsed.
	#[error(transparent)]
	Config(#[from] crate::config::ConfigError),
	/// Request signing failed.
	#[error(transparent)]
	Sign(#[from] crate::signer::SignError),
	/// Transport failure (DNS, TCP, TLS, non-success HTTP status).
	#[error("Network error occurred while calling the sensor API.")]
	Transport {
		/// Underlying HTTP client failure.
		#[source]
		source: reqwest::Error,
	},
	/// Sensor API returned malformed JSON that could not be parsed.
	#[error("Sensor API returned a malformed response body.")]
	ResponseParse {
		/// Structured parsing failure carrying the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Tabular encoding or output write failed.
	#[error(transparent)]
	Export(#[from] crate::export::ExportError),
}
impl From<reqwest::Error> for Error {
	fn from(e: reqwest::Error) -> Self {
		Self::Transport { source: e }
	}
}
