//! Request signing for the Roomalyzer API.
//!
//! Every call to the API carries a `checksum` parameter derived from the request
//! lane, selected query parameters, and the configured secret token. The scheme
//! is fixed by the remote service: a lowercase-hex Snefru-256 (eight rounds)
//! digest over `time + "." + <subject> + "." + token`, where the subject is the
//! `account` parameter for the `sensor_list` lane and the `sensor` parameter for
//! the `sensor_data` lane. Getting any byte of this wrong does not crash; the
//! service silently rejects the request.

// self
use crate::{_prelude::*, snefru::Snefru256};

/// Parameter key the derived checksum is stored under.
pub const CHECKSUM_PARAM: &str = "checksum";

/// Failures raised while signing a request.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SignError {
	/// The request lane is not covered by the checksum scheme.
	#[error("Unsupported request lane `{lane}`; no checksum scheme is defined for it.")]
	UnsupportedLane {
		/// The offending lane label.
		lane: String,
	},
}

/// Request-purpose discriminator understood by the remote API.
///
/// The lane selects both the queried resource and the parameter that feeds
/// checksum derivation. Unknown lanes fail at parse time; upstream's behavior
/// of silently dropping the parameter set for unknown lanes was an oversight
/// and is deliberately not reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
	/// Enumerate the sensors attached to an account.
	SensorList,
	/// Fetch readings for a single sensor.
	SensorData,
}
impl Lane {
	/// Returns the wire label for this lane.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::SensorList => "sensor_list",
			Self::SensorData => "sensor_data",
		}
	}

	/// Returns the query parameter whose value feeds checksum derivation.
	pub const fn subject_param(self) -> &'static str {
		match self {
			Self::SensorList => "account",
			Self::SensorData => "sensor",
		}
	}
}
impl Display for Lane {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Lane {
	type Err = SignError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sensor_list" => Ok(Self::SensorList),
			"sensor_data" => Ok(Self::SensorData),
			other => Err(SignError::UnsupportedLane { lane: other.to_owned() }),
		}
	}
}

/// Insertion-ordered string-to-string query parameter set.
///
/// The API treats parameters as an ordered mapping, so this keeps pairs in the
/// order they were added instead of sorting or deduplicating them.
/// [`get`](Self::get) returns the first value for a key, matching how the
/// service reads duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);
impl QueryParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a key-value pair, preserving insertion order.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.push((key.into(), value.into()));
	}

	/// Returns the first value recorded for `key`, if any.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Iterator over pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of stored pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no pairs are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<'a> IntoIterator for &'a QueryParams {
	type IntoIter = std::slice::Iter<'a, (String, String)>;
	type Item = &'a (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// Derives the checksum for `lane` and appends it to `params`.
///
/// Absent `time`/`account`/`sensor` parameters contribute the empty string to
/// the digest input, matching the service's own concatenation. Fails without
/// touching `params` when `lane` is not a recognized label.
pub fn sign(lane: &str, params: &mut QueryParams, token: &str) -> Result<(), SignError> {
	let lane = Lane::from_str(lane)?;

	params.insert(CHECKSUM_PARAM, checksum(lane, params, token));

	Ok(())
}

/// Computes the lowercase-hex checksum for `lane` over `params` and `token`.
pub fn checksum(lane: Lane, params: &QueryParams, token: &str) -> String {
	Snefru256::hex_digest(checksum_input(lane, params, token))
}

fn checksum_input(lane: Lane, params: &QueryParams, token: &str) -> String {
	let time = params.get("time").unwrap_or_default();
	let subject = params.get(lane.subject_param()).unwrap_or_default();

	format!("{time}.{subject}.{token}")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn sensor_data_params() -> QueryParams {
		QueryParams::from_iter([
			("lane", "sensor_data"),
			("sensor", "sensor1"),
			("time", "1704067200"),
			("hours", "48"),
		])
	}

	#[test]
	fn sensor_data_checksum_matches_reference() {
		// snefru256("1704067200.sensor1.abc"), eight rounds.
		let mut params = sensor_data_params();

		sign("sensor_data", &mut params, "abc").expect("Known lane must sign successfully.");

		assert_eq!(
			params.get(CHECKSUM_PARAM),
			Some("def09f718ffa4a7c4146cfff0971b3055592e1ac73d0dfc31b344d742c30a8d8"),
		);
	}

	#[test]
	fn sensor_list_checksum_reads_the_account_param() {
		// snefru256("1704067200.acct-9.abc"), eight rounds.
		let mut params = QueryParams::from_iter([
			("lane", "sensor_list"),
			("account", "acct-9"),
			("time", "1704067200"),
		]);

		sign("sensor_list", &mut params, "abc").expect("Known lane must sign successfully.");

		assert_eq!(
			params.get(CHECKSUM_PARAM),
			Some("24b61d58d5bf9775142132e150ec8ed224c64deb32643dbdcadde64f469df5e3"),
		);
	}

	#[test]
	fn unknown_lane_fails_without_adding_a_checksum() {
		let mut params = sensor_data_params();
		let before = params.clone();
		let err = sign("sensor_history", &mut params, "abc")
			.expect_err("Unknown lane must fail deterministically.");

		assert_eq!(err, SignError::UnsupportedLane { lane: "sensor_history".into() });
		assert_eq!(params, before, "Failed signing must not touch the parameter set.");
	}

	#[test]
	fn missing_subject_params_contribute_empty_strings() {
		let params = QueryParams::new();
		let input = checksum_input(Lane::SensorData, &params, "tok");

		assert_eq!(input, "..tok");
	}

	#[test]
	fn params_preserve_insertion_order_and_first_match() {
		let mut params = QueryParams::new();

		params.insert("lane", "sensor_data");
		params.insert("lane", "sensor_list");
		params.insert("time", "1");

		assert_eq!(params.get("lane"), Some("sensor_data"));
		assert_eq!(
			params.iter().map(|(k, _)| k).collect::<Vec<_>>(),
			vec!["lane", "lane", "time"],
		);
		assert_eq!(params.len(), 3);
	}

	#[test]
	fn lane_labels_round_trip() {
		for lane in [Lane::SensorList, Lane::SensorData] {
			assert_eq!(Lane::from_str(lane.as_str()), Ok(lane));
		}
		assert!(Lane::from_str("").is_err());
	}
}
