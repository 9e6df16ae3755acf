//! Wire-level data model for sensor API responses.

// self
use crate::_prelude::*;

/// Number of fields carried by a [`SensorReading`].
pub const FIELD_COUNT: usize = 15;

/// One flat measurement record returned by the API.
///
/// Every value is a string even where semantically numeric. That is a property
/// of the upstream API, not a modeling choice, and the exported CSV must carry
/// the values through unchanged; nothing here coerces types. Field declaration
/// order is canonical and drives the CSV column order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SensorReading {
	/// Record identifier.
	pub id: String,
	/// Measurement timestamp as reported upstream.
	pub datetime: String,
	/// Identifier of the reporting sensor.
	pub sensor: String,
	/// Air temperature.
	pub temperature: String,
	/// Relative humidity.
	pub humidity: String,
	/// CO2 concentration.
	pub co2: String,
	/// Volatile organic compound level.
	pub voc: String,
	/// Average sound level.
	pub sound: String,
	/// Low sound band level.
	pub sound_low: String,
	/// High sound band level.
	pub sound_high: String,
	/// Ambient light level.
	pub light_level: String,
	/// Ambient light color.
	pub light_colour: String,
	/// Occupancy indicator.
	pub occupancy: String,
	/// Radio signal strength of the sensor.
	pub rssi: String,
	/// Battery voltage of the sensor.
	pub voltage: String,
}
impl SensorReading {
	/// Field names in canonical declaration order.
	pub const FIELD_NAMES: [&'static str; FIELD_COUNT] = [
		"id",
		"datetime",
		"sensor",
		"temperature",
		"humidity",
		"co2",
		"voc",
		"sound",
		"sound_low",
		"sound_high",
		"light_level",
		"light_colour",
		"occupancy",
		"rssi",
		"voltage",
	];

	/// Consumes the reading into its values, ordered to match [`Self::FIELD_NAMES`].
	pub fn into_row(self) -> [String; FIELD_COUNT] {
		[
			self.id,
			self.datetime,
			self.sensor,
			self.temperature,
			self.humidity,
			self.co2,
			self.voc,
			self.sound,
			self.sound_low,
			self.sound_high,
			self.light_level,
			self.light_colour,
			self.occupancy,
			self.rssi,
			self.voltage,
		]
	}
}

/// Response body wrapper returned by every API lane.
///
/// A missing or malformed `data` array fails at deserialization time, before
/// any row is produced; the exporter treats that as the data-shape error for
/// the whole run.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Envelope {
	/// Upstream status label, passed through for logging.
	pub status: String,
	/// Readings in the order the API returned them.
	pub data: Vec<SensorReading>,
}

#[cfg(test)]
pub(crate) fn sample_reading() -> SensorReading {
	SensorReading {
		id: "1".into(),
		datetime: "2024-01-01T00:00:00Z".into(),
		sensor: "sensor1".into(),
		temperature: "21.5".into(),
		humidity: "40".into(),
		co2: "600".into(),
		voc: "10".into(),
		sound: "30".into(),
		sound_low: "20".into(),
		sound_high: "40".into(),
		light_level: "100".into(),
		light_colour: "white".into(),
		occupancy: "1".into(),
		rssi: "-50".into(),
		voltage: "3.3".into(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const SAMPLE_BODY: &str = r#"{
		"status": "ok",
		"data": [{
			"id": "1",
			"datetime": "2024-01-01T00:00:00Z",
			"sensor": "sensor1",
			"temperature": "21.5",
			"humidity": "40",
			"co2": "600",
			"voc": "10",
			"sound": "30",
			"sound_low": "20",
			"sound_high": "40",
			"light_level": "100",
			"light_colour": "white",
			"occupancy": "1",
			"rssi": "-50",
			"voltage": "3.3"
		}]
	}"#;

	#[test]
	fn envelope_deserializes_readings_in_order() {
		let envelope: Envelope =
			serde_json::from_str(SAMPLE_BODY).expect("Sample body should deserialize.");

		assert_eq!(envelope.status, "ok");
		assert_eq!(envelope.data, vec![sample_reading()]);
	}

	#[test]
	fn envelope_rejects_a_missing_data_array() {
		assert!(serde_json::from_str::<Envelope>(r#"{"status":"ok"}"#).is_err());
		assert!(serde_json::from_str::<Envelope>(r#"{"status":"ok","data":"nope"}"#).is_err());
	}

	#[test]
	fn row_order_matches_field_names() {
		let row = sample_reading().into_row();

		assert_eq!(row.len(), SensorReading::FIELD_NAMES.len());
		assert_eq!(row[0], "1");
		assert_eq!(row[2], "sensor1");
		assert_eq!(row[FIELD_COUNT - 1], "3.3");
	}

	#[test]
	fn values_survive_untouched() {
		// No numeric coercion anywhere; "40" stays the exact string it arrived as.
		let reading = sample_reading();
		let json = serde_json::to_string(&reading).expect("Reading should serialize.");
		let back: SensorReading =
			serde_json::from_str(&json).expect("Reading should deserialize.");

		assert_eq!(back, reading);
	}
}
