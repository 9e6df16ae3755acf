// std
use std::{env, fs, path::PathBuf, process};
// crates.io
use httpmock::prelude::*;
use time::OffsetDateTime;
use url::Url;
// self
use roomalyzer_export::{
	client::ApiClient,
	config::Config,
	error::Error,
	export,
	reading::SensorReading,
};

const SAMPLE_BODY: &str = r#"{"status":"ok","data":[{"id":"1","datetime":"2024-01-01T00:00:00Z","sensor":"sensor1","temperature":"21.5","humidity":"40","co2":"600","voc":"10","sound":"30","sound_low":"20","sound_high":"40","light_level":"100","light_colour":"white","occupancy":"1","rssi":"-50","voltage":"3.3"}]}"#;

// snefru256("1704067200.sensor1.abc"), eight rounds.
const EXPECTED_CHECKSUM: &str = "def09f718ffa4a7c4146cfff0971b3055592e1ac73d0dfc31b344d742c30a8d8";

fn fixture_config() -> Config {
	Config { token: "abc".into(), sensor: "sensor1".into() }
}

fn fixture_time() -> OffsetDateTime {
	OffsetDateTime::from_unix_timestamp(1_704_067_200)
		.expect("Fixture timestamp should be valid.")
}

fn mock_client(server: &MockServer) -> ApiClient {
	let endpoint =
		Url::parse(&server.url("/api/index.php")).expect("Failed to parse mock endpoint URL.");

	ApiClient::with_endpoint(endpoint).expect("Failed to build API client for tests.")
}

fn temp_output(tag: &str) -> PathBuf {
	env::temp_dir().join(format!("roomalyzer_export_it_{tag}_{}.csv", process::id()))
}

#[test]
fn signed_fetch_flattens_and_writes_unchanged_values() {
	let server = MockServer::start();
	let data_mock = server.mock(|when, then| {
		when.method(GET)
			.path("/api/index.php")
			.query_param("lane", "sensor_data")
			.query_param("sensor", "sensor1")
			.query_param("time", "1704067200")
			.query_param("hours", "48")
			.query_param("checksum", EXPECTED_CHECKSUM);
		then.status(200).header("content-type", "application/json").body(SAMPLE_BODY);
	});
	let client = mock_client(&server);
	let envelope = client
		.fetch_sensor_data_at(&fixture_config(), fixture_time())
		.expect("Signed fetch against the mock server should succeed.");

	assert_eq!(envelope.status, "ok");
	assert_eq!(envelope.data.len(), 1);

	let rows = export::flatten(envelope.data);
	let path = temp_output("round_trip");

	export::write_csv(&path, &rows).expect("CSV write should succeed.");

	let contents = fs::read_to_string(&path).expect("Output file should be readable.");
	let lines: Vec<&str> = contents.lines().collect();

	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], SensorReading::FIELD_NAMES.join(","));
	assert_eq!(lines[1], "1,2024-01-01T00:00:00Z,sensor1,21.5,40,600,10,30,20,40,100,white,1,-50,3.3");

	data_mock.assert();
	fs::remove_file(&path).expect("Temporary output file should be removable.");
}

#[test]
fn empty_data_array_yields_just_the_header() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path("/api/index.php");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"status":"ok","data":[]}"#);
	});

	let client = mock_client(&server);
	let envelope = client
		.fetch_sensor_data_at(&fixture_config(), fixture_time())
		.expect("Fetch of an empty window should succeed.");
	let rows = export::flatten(envelope.data);
	let path = temp_output("empty");

	export::write_csv(&path, &rows).expect("CSV write should succeed.");

	let contents = fs::read_to_string(&path).expect("Output file should be readable.");

	assert_eq!(contents.lines().count(), 1);
	assert_eq!(contents.lines().next(), Some(SensorReading::FIELD_NAMES.join(",").as_str()));

	fs::remove_file(&path).expect("Temporary output file should be removable.");
}

#[test]
fn malformed_body_surfaces_a_parse_error() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path("/api/index.php");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"status":"ok"}"#);
	});

	let client = mock_client(&server);
	let err = client
		.fetch_sensor_data_at(&fixture_config(), fixture_time())
		.expect_err("Absent record list must fail the run.");

	assert!(matches!(err, Error::ResponseParse { .. }), "Unexpected error variant: {err:?}.");
}

#[test]
fn non_success_status_surfaces_a_transport_error() {
	let server = MockServer::start();

	server.mock(|when, then| {
		when.method(GET).path("/api/index.php");
		then.status(503);
	});

	let client = mock_client(&server);
	let err = client
		.fetch_sensor_data_at(&fixture_config(), fixture_time())
		.expect_err("Non-success HTTP status must fail the run.");

	assert!(matches!(err, Error::Transport { .. }), "Unexpected error variant: {err:?}.");
}
