//! Flattens readings to fixed-width rows and writes them as CSV.

// std
use std::fs::File;
// self
use crate::{
	_prelude::*,
	reading::{FIELD_COUNT, SensorReading},
};

/// Failures raised while encoding or writing the output file.
#[derive(Debug, ThisError)]
pub enum ExportError {
	/// Output file could not be created.
	#[error("Failed to create output file {path}.")]
	Create {
		/// Path that was attempted.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// A row could not be encoded or flushed.
	#[error("Failed to write CSV output.")]
	Write(#[from] csv::Error),
	/// Buffered output could not be flushed to disk.
	#[error("Failed to flush CSV output.")]
	Flush(#[source] std::io::Error),
}

/// Flattens `readings` into ordered rows of constant width [`FIELD_COUNT`].
///
/// Row 0 is the header in canonical field order; each subsequent row carries
/// one reading's values in that same order. Values are emitted exactly as
/// received, and input order is preserved.
pub fn flatten(readings: Vec<SensorReading>) -> Vec<[String; FIELD_COUNT]> {
	let mut rows = Vec::with_capacity(readings.len() + 1);

	rows.push(SensorReading::FIELD_NAMES.map(ToOwned::to_owned));
	rows.extend(readings.into_iter().map(SensorReading::into_row));

	rows
}

/// Writes `rows` to `path` as comma-delimited CSV.
pub fn write_csv(path: impl AsRef<Path>, rows: &[[String; FIELD_COUNT]]) -> Result<(), ExportError> {
	let path = path.as_ref();
	let file = File::create(path)
		.map_err(|e| ExportError::Create { path: path.to_path_buf(), source: e })?;
	let mut writer = csv::Writer::from_writer(file);

	for row in rows {
		writer.write_record(row)?;
	}

	writer.flush().map_err(ExportError::Flush)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, fs, process};
	// self
	use super::*;
	use crate::reading::sample_reading;

	fn temp_path(tag: &str) -> PathBuf {
		env::temp_dir().join(format!("roomalyzer_export_{tag}_{}.csv", process::id()))
	}

	#[test]
	fn flatten_empty_produces_just_the_header() {
		let rows = flatten(Vec::new());

		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0], SensorReading::FIELD_NAMES.map(ToOwned::to_owned));
	}

	#[test]
	fn flatten_preserves_order_and_width() {
		let mut second = sample_reading();

		second.id = "2".into();
		second.temperature = "22.0".into();

		let rows = flatten(vec![sample_reading(), second]);

		assert_eq!(rows.len(), 3);

		for row in &rows {
			assert_eq!(row.len(), FIELD_COUNT);
		}

		assert_eq!(rows[1][0], "1");
		assert_eq!(rows[2][0], "2");
		assert_eq!(rows[2][3], "22.0");
	}

	#[test]
	fn flatten_round_trips_by_position() {
		// Re-joining values with the header by position recovers every field exactly.
		let reading = sample_reading();
		let rows = flatten(vec![reading.clone()]);
		let rejoined: Vec<(&str, &str)> = rows[0]
			.iter()
			.zip(rows[1].iter())
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect();

		assert_eq!(rejoined[0], ("id", "1"));
		assert_eq!(rejoined[11], ("light_colour", "white"));
		assert_eq!(rejoined[14], ("voltage", "3.3"));

		let original = reading.into_row();

		for (i, (_, value)) in rejoined.iter().enumerate() {
			assert_eq!(*value, original[i]);
		}
	}

	#[test]
	fn write_csv_emits_header_plus_one_line_per_reading() {
		let path = temp_path("write");
		let rows = flatten(vec![sample_reading()]);

		write_csv(&path, &rows).expect("CSV write should succeed.");

		let contents = fs::read_to_string(&path).expect("Output file should be readable.");
		let lines: Vec<&str> = contents.lines().collect();

		assert_eq!(lines.len(), 2);
		assert_eq!(
			lines[0],
			"id,datetime,sensor,temperature,humidity,co2,voc,sound,sound_low,sound_high,\
			 light_level,light_colour,occupancy,rssi,voltage",
		);
		assert_eq!(
			lines[1],
			"1,2024-01-01T00:00:00Z,sensor1,21.5,40,600,10,30,20,40,100,white,1,-50,3.3",
		);

		fs::remove_file(&path).expect("Temporary output file should be removable.");
	}

	#[test]
	fn write_csv_reports_uncreatable_paths() {
		let rows = flatten(Vec::new());
		let err = write_csv("definitely/not/a/dir/output.csv", &rows)
			.expect_err("Uncreatable output path must fail the write.");

		assert!(matches!(err, ExportError::Create { .. }));
	}
}
