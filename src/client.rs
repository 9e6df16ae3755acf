//! Blocking HTTP fetch against the fixed Roomalyzer endpoint.
//!
//! The exporter performs exactly one request per run, so the transport stays
//! deliberately synchronous: build the signed parameter set, block on the GET,
//! block on the body read, parse, done. No retries, no timeout tuning beyond
//! reqwest's defaults, no connection reuse worth speaking of.

// self
use crate::{
	_prelude::*,
	config::{Config, ConfigError},
	reading::Envelope,
	signer::{self, Lane, QueryParams},
};

/// Fixed API endpoint for every lane.
pub const API_ENDPOINT: &str = "https://app.roomalyzer.com/api/index.php";
/// Size of the requested reading window, in hours. Fixed upstream.
pub const DATA_WINDOW_HOURS: u32 = 48;

/// Thin wrapper around a blocking [`reqwest`] client bound to one endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::blocking::Client,
	endpoint: Url,
}
impl ApiClient {
	/// Creates a client bound to [`API_ENDPOINT`].
	pub fn new() -> Result<Self> {
		let endpoint = Url::parse(API_ENDPOINT)
			.map_err(|e| ConfigError::InvalidEndpoint { source: e })?;

		Self::with_endpoint(endpoint)
	}

	/// Creates a client bound to `endpoint`. Tests point this at a mock server.
	pub fn with_endpoint(endpoint: Url) -> Result<Self> {
		let http = reqwest::blocking::Client::builder().build()?;

		Ok(Self { http, endpoint })
	}

	/// Fetches the configured sensor's readings for the current time window.
	pub fn fetch_sensor_data(&self, config: &Config) -> Result<Envelope> {
		self.fetch_sensor_data_at(config, OffsetDateTime::now_utc())
	}

	/// Fetches sensor readings with an explicit request timestamp.
	pub fn fetch_sensor_data_at(&self, config: &Config, at: OffsetDateTime) -> Result<Envelope> {
		let mut params = sensor_data_params(&config.sensor, at);

		signer::sign(Lane::SensorData.as_str(), &mut params, &config.token)?;

		let mut url = self.endpoint.clone();

		url.query_pairs_mut().extend_pairs(params.iter());

		tracing::debug!(sensor = %config.sensor, "Requesting sensor data.");

		let response = self.http.get(url).send()?.error_for_status()?;
		let body = response.bytes()?;
		let mut deserializer = serde_json::Deserializer::from_slice(&body);
		let envelope: Envelope = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| Error::ResponseParse { source: e })?;

		tracing::info!(
			status = %envelope.status,
			readings = envelope.data.len(),
			"Fetched sensor data."
		);

		Ok(envelope)
	}
}

/// Builds the unsigned query parameter set for a `sensor_data` request.
pub fn sensor_data_params(sensor: &str, at: OffsetDateTime) -> QueryParams {
	QueryParams::from_iter([
		("lane", Lane::SensorData.as_str().to_owned()),
		("sensor", sensor.to_owned()),
		("time", at.unix_timestamp().to_string()),
		("hours", DATA_WINDOW_HOURS.to_string()),
	])
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn params_carry_the_documented_keys_in_order() {
		let at = OffsetDateTime::from_unix_timestamp(1_704_067_200)
			.expect("Fixture timestamp should be valid.");
		let params = sensor_data_params("sensor1", at);
		let pairs: Vec<(&str, &str)> = params.iter().collect();

		assert_eq!(
			pairs,
			vec![
				("lane", "sensor_data"),
				("sensor", "sensor1"),
				("time", "1704067200"),
				("hours", "48"),
			],
		);
	}

	#[test]
	fn endpoint_constant_parses() {
		assert!(ApiClient::new().is_ok());
	}
}
