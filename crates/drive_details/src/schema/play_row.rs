use serde::Deserialize;

/// One table row as handed over by the markup extraction step. Every cell is
/// optional because header and spacer rows carry only some of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayRow {
	pub quarter: Option<String>,
	pub overtime_header: Option<String>,
	pub time_remaining: Option<String>,
	pub down: Option<String>,
	pub to_go: Option<String>,
	pub location: Option<String>,
	pub detail: Option<String>,
	pub exp_points_before: Option<String>,
	pub exp_points_after: Option<String>,
}

impl PlayRow {
	pub fn play(quarter: &str, time_remaining: &str, detail: &str) -> Self {
		PlayRow {
			quarter: Some(quarter.to_string()),
			time_remaining: Some(time_remaining.to_string()),
			detail: Some(detail.to_string()),
			..Default::default()
		}
	}

	pub fn overtime_header(text: &str) -> Self {
		PlayRow {
			overtime_header: Some(text.to_string()),
			..Default::default()
		}
	}
}

/// Game level context copied into the leading columns of every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameInfo {
	pub date: Option<String>,
	pub season: Option<u16>,
	pub week: Option<u8>,
	pub away_team: Option<String>,
	pub home_team: Option<String>,
	pub game_time: Option<String>,
}

/// A game's rows in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameRows {
	#[serde(default)]
	pub game: GameInfo,
	pub rows: Vec<PlayRow>,
}
