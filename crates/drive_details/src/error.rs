use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameClockError {
	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Invalid time format: {time}")]
	InvalidTimeFormat { time: String },

	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
	#[error("Cell is not numeric: {input}")]
	NotNumeric { input: String },

	#[error("Number out of range: {input}")]
	OutOfRange { input: String },
}

#[derive(Debug, Error)]
pub enum DriveDetailsError {
	#[error("IO error occurred: {0}")]
	Io(#[from] io::Error),

	#[error("Failed to read game rows: {0}")]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error("Input contains no games")]
	NoGames,
}

impl GameClockError {
	pub fn invalid_minutes_error(minutes: u8) -> Self {
		GameClockError::InvalidMinutes { minutes }
	}

	pub fn invalid_seconds_error(seconds: u8) -> Self {
		GameClockError::InvalidSeconds { seconds }
	}

	pub fn invalid_time_format_error(time: &str) -> Self {
		GameClockError::InvalidTimeFormat { time: time.to_string() }
	}

	pub fn invalid_quarter_error(quarter: &str) -> Self {
		GameClockError::InvalidQuarter { quarter: quarter.to_string() }
	}
}

impl NumericError {
	pub fn not_numeric(input: &str) -> Self {
		NumericError::NotNumeric { input: input.to_string() }
	}

	pub fn out_of_range(input: &str) -> Self {
		NumericError::OutOfRange { input: input.to_string() }
	}
}
