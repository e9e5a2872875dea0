use serde::Serialize;
use std::fmt;

/// Category a row was classified into. A row that matched nothing carries no
/// play type at all (`Option::None` on the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayType {
	Run,
	Pass,
	Punt,
	Kickoff,
	#[serde(rename = "Extra Point")]
	ExtraPoint,
	#[serde(rename = "Field Goal")]
	FieldGoal,
	#[serde(rename = "Two Point")]
	TwoPoint,
	Aborted,
	Other,
}

impl PlayType {
	pub fn as_str(&self) -> &'static str {
		match self {
			PlayType::Run => "Run",
			PlayType::Pass => "Pass",
			PlayType::Punt => "Punt",
			PlayType::Kickoff => "Kickoff",
			PlayType::ExtraPoint => "Extra Point",
			PlayType::FieldGoal => "Field Goal",
			PlayType::TwoPoint => "Two Point",
			PlayType::Aborted => "Aborted",
			PlayType::Other => "Other",
		}
	}
}

impl fmt::Display for PlayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Side of the field a run or pass went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
	Left,
	Right,
	Middle,
}

impl Direction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Left => "Left",
			Direction::Right => "Right",
			Direction::Middle => "Middle",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunGap {
	End,
	Tackle,
	Guard,
	Middle,
}

impl RunGap {
	pub fn as_str(&self) -> &'static str {
		match self {
			RunGap::End => "End",
			RunGap::Tackle => "Tackle",
			RunGap::Guard => "Guard",
			RunGap::Middle => "Middle",
		}
	}
}

impl fmt::Display for RunGap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PassDepth {
	Short,
	Deep,
}

impl PassDepth {
	pub fn as_str(&self) -> &'static str {
		match self {
			PassDepth::Short => "Short",
			PassDepth::Deep => "Deep",
		}
	}
}

impl fmt::Display for PassDepth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
