//! Exporter configuration loaded once at startup.

// std
use std::fs;
// self
use crate::_prelude::*;

/// Default configuration file path, matching the deployed tool.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Failures raised while loading the configuration file.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration file could not be read.
	#[error("Failed to read configuration file {path}.")]
	Read {
		/// Path that was attempted.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// Configuration document could not be parsed.
	#[error("Failed to parse configuration document.")]
	Parse(#[from] serde_yaml::Error),
	/// API endpoint URL is invalid.
	#[error("API endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// API credentials and device selection.
///
/// Loaded from a YAML document with two recognized keys: `token` (the shared
/// secret fed into checksum derivation, never sent on the wire itself) and
/// `sensor` (the device identifier to query). Immutable after load.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
	/// Shared secret used to derive request checksums.
	pub token: String,
	/// Identifier of the sensor to export readings for.
	pub sensor: String,
}
impl Config {
	/// Reads and parses the configuration file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let raw = fs::read_to_string(path)
			.map_err(|e| ConfigError::Read { path: path.to_path_buf(), source: e })?;

		Self::parse(&raw)
	}

	/// Parses a YAML configuration document.
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		Ok(serde_yaml::from_str(raw)?)
	}
}
impl Debug for Config {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Config")
			.field("token", &"<redacted>")
			.field("sensor", &self.sensor)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parse_recognizes_both_keys() {
		let config = Config::parse("token: \"abc\"\nsensor: \"sensor1\"\n")
			.expect("Well-formed configuration should parse successfully.");

		assert_eq!(config.token, "abc");
		assert_eq!(config.sensor, "sensor1");
	}

	#[test]
	fn parse_rejects_missing_keys() {
		assert!(Config::parse("token: \"abc\"\n").is_err());
		assert!(Config::parse(": definitely not yaml at all").is_err());
	}

	#[test]
	fn debug_redacts_the_token() {
		let config = Config { token: "abc".into(), sensor: "sensor1".into() };
		let rendered = format!("{config:?}");

		assert!(!rendered.contains("abc"), "Secret token must not leak through Debug.");
		assert!(rendered.contains("sensor1"));
	}

	#[test]
	fn load_reports_missing_file() {
		let err = Config::load("definitely/not/a/config.yml")
			.expect_err("Missing configuration file must fail the load.");

		assert!(matches!(err, ConfigError::Read { .. }));
	}
}
