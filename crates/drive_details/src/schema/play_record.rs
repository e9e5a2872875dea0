use crate::schema::{Direction, GameInfo, PassDepth, PenaltyStatus, PlayResult, PlayType, Quarter, RunGap};
use serde::Serialize;

/// Output column order expected by the drive details sheets.
pub const COLUMNS: [&str; 33] = [
	"Date",
	"Season",
	"Week",
	"Away Team",
	"Home Team",
	"Game_Time",
	"Quarter",
	"Time",
	"Down",
	"ToGo",
	"Location",
	"Detail",
	"Play_Type",
	"Primary_Player",
	"Receiver",
	"Sack_By",
	"Run_Location",
	"Run_Gap",
	"Pass_Type",
	"Pass_Location",
	"Pass_Yards",
	"Field_Goal_Yards",
	"Yards",
	"Tackler",
	"Tackler2",
	"Defender",
	"Result",
	"Penalized_Player",
	"Penalty_Yards",
	"Penalty",
	"Penalty_Accepted",
	"EPB",
	"EPA",
];

/// Everything that is read out of the detail text of a single row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayDetails {
	pub detail: Option<String>,
	pub play_type: Option<PlayType>,
	pub primary_player: Option<String>,
	pub receiver: Option<String>,
	pub sack_by: Option<String>,
	pub run_location: Option<Direction>,
	pub run_gap: Option<RunGap>,
	pub pass_type: Option<PassDepth>,
	pub pass_location: Option<Direction>,
	pub pass_yards: Option<i32>,
	pub field_goal_yards: Option<i32>,
	pub yards: Option<i32>,
	pub tackler: Option<String>,
	pub tackler2: Option<String>,
	pub defender: Option<String>,
	pub result: Option<PlayResult>,
	pub penalized_player: Option<String>,
	pub penalty_yards: Option<i32>,
	pub penalty: bool,
	pub penalty_accepted: Option<PenaltyStatus>,
}

impl PlayDetails {
	pub fn new(detail: Option<String>) -> Self {
		PlayDetails {
			detail,
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayRecord {
	pub quarter: Quarter,
	pub time: Option<String>,
	pub down: Option<String>,
	pub to_go: Option<String>,
	pub location: Option<String>,
	#[serde(flatten)]
	pub details: PlayDetails,
	pub epb: Option<f64>,
	pub epa: Option<f64>,
}

impl PlayRecord {
	/// Rows without detail text are header or spacer rows.
	pub fn has_play(&self) -> bool {
		self.details.detail.as_deref().is_some_and(|detail| !detail.is_empty())
	}

	/// Cells in [`COLUMNS`] order; null fields render as empty cells.
	pub fn to_row(&self, game: &GameInfo) -> Vec<String> {
		let d = &self.details;
		vec![
			cell(game.date.as_ref()),
			cell(game.season.as_ref()),
			cell(game.week.as_ref()),
			cell(game.away_team.as_ref()),
			cell(game.home_team.as_ref()),
			cell(game.game_time.as_ref()),
			self.quarter.to_string(),
			cell(self.time.as_ref()),
			cell(self.down.as_ref()),
			cell(self.to_go.as_ref()),
			cell(self.location.as_ref()),
			cell(d.detail.as_ref()),
			cell(d.play_type.as_ref()),
			cell(d.primary_player.as_ref()),
			cell(d.receiver.as_ref()),
			cell(d.sack_by.as_ref()),
			cell(d.run_location.as_ref()),
			cell(d.run_gap.as_ref()),
			cell(d.pass_type.as_ref()),
			cell(d.pass_location.as_ref()),
			cell(d.pass_yards.as_ref()),
			cell(d.field_goal_yards.as_ref()),
			cell(d.yards.as_ref()),
			cell(d.tackler.as_ref()),
			cell(d.tackler2.as_ref()),
			cell(d.defender.as_ref()),
			cell(d.result.as_ref()),
			cell(d.penalized_player.as_ref()),
			cell(d.penalty_yards.as_ref()),
			if d.penalty { "Penalty".to_string() } else { String::new() },
			cell(d.penalty_accepted.as_ref()),
			cell(self.epb.as_ref()),
			cell(self.epa.as_ref()),
		]
	}
}

fn cell<T: ToString>(value: Option<&T>) -> String {
	value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(details: PlayDetails) -> PlayRecord {
		PlayRecord {
			quarter: Quarter::OVERTIME,
			time: Some("9:12".to_string()),
			down: Some("3".to_string()),
			to_go: Some("7".to_string()),
			location: Some("KAN 41".to_string()),
			details,
			epb: Some(1.5),
			epa: None,
		}
	}

	#[test]
	fn test_to_row_matches_columns() {
		let details = PlayDetails {
			detail: Some("Tom Brady pass complete to Rob Gronkowski for 15 yards, touchdown".to_string()),
			play_type: Some(PlayType::Pass),
			primary_player: Some("Tom Brady".to_string()),
			receiver: Some("Rob Gronkowski".to_string()),
			pass_yards: Some(15),
			yards: Some(15),
			result: Some(PlayResult::Touchdown),
			..Default::default()
		};
		let game = GameInfo {
			date: Some("2019-01-20".to_string()),
			season: Some(2018),
			week: Some(20),
			away_team: Some("New England Patriots".to_string()),
			home_team: Some("Kansas City Chiefs".to_string()),
			game_time: Some("6:40pm".to_string()),
		};

		let row = record(details).to_row(&game);
		assert_eq!(row.len(), COLUMNS.len());

		let by_column = |name: &str| row[COLUMNS.iter().position(|c| *c == name).unwrap()].as_str();
		assert_eq!(by_column("Season"), "2018");
		assert_eq!(by_column("Quarter"), "5");
		assert_eq!(by_column("Play_Type"), "Pass");
		assert_eq!(by_column("Receiver"), "Rob Gronkowski");
		assert_eq!(by_column("Pass_Yards"), "15");
		assert_eq!(by_column("Result"), "Touchdown");
		assert_eq!(by_column("Penalty"), "");
		assert_eq!(by_column("EPB"), "1.5");
		assert_eq!(by_column("EPA"), "");
	}

	#[test]
	fn test_penalty_columns() {
		let details = PlayDetails {
			detail: Some("Penalty on Jalen Ramsey, Defensive Holding, 5 yards, accepted".to_string()),
			play_type: Some(PlayType::Other),
			result: Some(PlayResult::PenaltyAccepted),
			penalty: true,
			penalty_accepted: Some(PenaltyStatus::Accepted),
			penalized_player: Some("Jalen Ramsey".to_string()),
			penalty_yards: Some(5),
			..Default::default()
		};

		let row = record(details).to_row(&GameInfo::default());
		assert_eq!(&row[26..31], &["Penalty Accepted", "Jalen Ramsey", "5", "Penalty", "Accepted"]);
		assert_eq!(&row[..6], &["", "", "", "", "", ""]);
	}

	#[test]
	fn test_has_play() {
		assert!(record(PlayDetails::new(Some("x".to_string()))).has_play());
		assert!(!record(PlayDetails::new(Some(String::new()))).has_play());
		assert!(!record(PlayDetails::new(None)).has_play());
	}

	#[test]
	fn test_json_flattens_details() {
		let value = serde_json::to_value(record(PlayDetails::new(None))).unwrap();
		assert_eq!(value["quarter"], 5);
		assert_eq!(value["penalty"], false);
		assert!(value.get("details").is_none());
	}
}
