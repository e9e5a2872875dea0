use crate::error::GameClockError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Period label of a row. 1-4 are regulation, 5 and 6 are the first and
/// second overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Quarter(u8);

impl Quarter {
	pub const FIRST: Quarter = Quarter(1);
	pub const OVERTIME: Quarter = Quarter(5);
	pub const DOUBLE_OVERTIME: Quarter = Quarter(6);

	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if (1..=6).contains(&value) {
			Ok(Quarter(value))
		} else {
			Err(GameClockError::invalid_quarter_error(&value.to_string()))
		}
	}

	pub fn number(self) -> u8 {
		self.0
	}

	pub fn is_overtime(self) -> bool {
		self.0 >= Self::OVERTIME.0
	}
}

impl Default for Quarter {
	fn default() -> Self {
		Self::FIRST
	}
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Quarter {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let value = trimmed.parse::<u8>().map_err(|_| GameClockError::invalid_quarter_error(trimmed))?;
		Quarter::new(value)
	}
}

/// Minutes part of a period clock, at most 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(u8);

impl Minutes {
	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if value > 15 {
			Err(GameClockError::invalid_minutes_error(value))
		} else {
			Ok(Minutes(value))
		}
	}
}

impl FromStr for Minutes {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u8>()?;
		Minutes::new(value)
	}
}

/// Seconds part of a period clock, below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(u8);

impl Seconds {
	pub fn new(value: u8) -> Result<Self, GameClockError> {
		if value >= 60 {
			Err(GameClockError::invalid_seconds_error(value))
		} else {
			Ok(Seconds(value))
		}
	}
}

impl FromStr for Seconds {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<u8>()?;
		Seconds::new(value)
	}
}

/// Time remaining in a period, as printed in the `mm:ss` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
	minutes: Minutes,
	seconds: Seconds,
}

impl GameClock {
	pub fn new(minutes: Minutes, seconds: Seconds) -> Self {
		GameClock { minutes, seconds }
	}

	pub fn total_seconds(&self) -> u32 {
		u32::from(self.minutes.0) * 60 + u32::from(self.seconds.0)
	}
}

impl FromStr for GameClock {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (minutes_str, seconds_str) = s.trim().split_once(':').ok_or_else(|| GameClockError::invalid_time_format_error(s))?;

		let minutes = minutes_str.parse::<Minutes>()?;
		let seconds = seconds_str.parse::<Seconds>()?;

		Ok(GameClock::new(minutes, seconds))
	}
}
