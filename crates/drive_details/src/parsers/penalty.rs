use super::numeric::parse_yards;
use super::patterns::{compile, compile_all, first_capture, first_name, PLAYER};
use crate::schema::{PenaltyStatus, PlayDetails, PlayType};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static PENALIZED_PLAYER: Lazy<Vec<Regex>> = Lazy::new(|| {
	compile_all(&[
		format!(r"penalty on\s+({PLAYER})"),
		format!(r"penalty,?\s+({PLAYER})"),
		format!(r"penalty:\s+({PLAYER})"),
		format!(r"({PLAYER}),?\s+penalty"),
	])
});

static PENALTY_YARDS: Lazy<Vec<Regex>> = Lazy::new(|| {
	[
		r"penalty[^,]*,\s*(\d+)\s*yards?",
		r"(\d+)\s*yard\s*penalty",
		r"penalty[^,\d]*(\d+)\s*yards?",
		r",\s*(\d+)\s*yards?,\s*(?:accepted|declined)",
	]
	.into_iter()
	.map(compile)
	.collect()
});

/// Overlays the penalty columns. Runs after classification whatever the play
/// type; a play nothing else claimed becomes `Other` with the disposition as
/// its result.
pub fn annotate(text: &str, details: &mut PlayDetails) {
	if !text.contains("penalty") {
		return;
	}

	let status = if text.contains("decline") {
		PenaltyStatus::Declined
	} else {
		PenaltyStatus::Accepted
	};
	details.penalty = true;
	details.penalty_accepted = Some(status);
	details.penalized_player = first_name(&PENALIZED_PLAYER, text);
	details.penalty_yards = penalty_yards(text);

	if details.play_type.is_none() {
		details.play_type = Some(PlayType::Other);
		details.result = Some(status.as_result());
	}

	debug!(?status, player = ?details.penalized_player, yards = ?details.penalty_yards, "penalty annotated");
}

fn penalty_yards(text: &str) -> Option<i32> {
	let digits = first_capture(&PENALTY_YARDS, text)?;
	match parse_yards(digits) {
		Ok(yards) => Some(yards),
		Err(e) => {
			warn!(error = %e, "discarding penalty yardage");
			None
		}
	}
}
