use super::classifier;
use super::extractors::{extract_defense, extract_yards};
use super::normalize::normalize;
use super::numeric::expected_points;
use super::penalty;
use super::period::{PeriodState, PeriodTracker};
use super::result;
use crate::schema::{GameRows, PlayDetails, PlayRecord, PlayRow};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Structured fields of one detail cell. Blank or missing text yields a
/// record with every field unset.
pub fn parse_detail(detail: Option<&str>) -> PlayDetails {
	let raw = detail.map(str::trim).filter(|text| !text.is_empty());
	let mut details = PlayDetails::new(raw.map(str::to_string));

	let Some(text) = normalize(raw) else {
		return details;
	};

	details.yards = extract_yards(&text);
	classifier::apply(&text, &mut details);
	extract_defense(&text, &mut details);
	penalty::annotate(&text, &mut details);
	result::resolve(&text, &mut details);

	trace!(detail = %text, play_type = ?details.play_type, result = ?details.result, "parsed detail");
	details
}

fn cell(text: Option<&String>) -> Option<String> {
	text.map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Turns the rows of one game into records. Owns the period state, so a
/// parser must see the rows of exactly one game, in document order.
#[derive(Debug, Default)]
pub struct GameParser {
	tracker: PeriodTracker,
}

impl GameParser {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> PeriodState {
		self.tracker.state()
	}

	pub fn parse_row(&mut self, row: &PlayRow) -> PlayRecord {
		let quarter = self.tracker.observe(row);

		PlayRecord {
			quarter,
			time: cell(row.time_remaining.as_ref()),
			down: cell(row.down.as_ref()),
			to_go: cell(row.to_go.as_ref()),
			location: cell(row.location.as_ref()),
			details: parse_detail(row.detail.as_deref()),
			epb: expected_points(row.exp_points_before.as_deref()),
			epa: expected_points(row.exp_points_after.as_deref()),
		}
	}
}

pub fn parse_game<'a, I>(rows: I) -> Vec<PlayRecord>
where
	I: IntoIterator<Item = &'a PlayRow>,
{
	let mut parser = GameParser::new();
	let records: Vec<PlayRecord> = rows.into_iter().map(|row| parser.parse_row(row)).collect();
	debug!(rows = records.len(), final_quarter = %parser.state().current_quarter, "parsed game");
	records
}

/// Games are independent, so each gets its own parser on the rayon pool.
/// Output order follows input order.
pub fn parse_games(games: &[GameRows]) -> Vec<Vec<PlayRecord>> {
	games.par_iter().map(|game| parse_game(&game.rows)).collect()
}
