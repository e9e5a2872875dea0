use crate::parsers::patterns::{compile, first_name, CLAUSE_END, PLAYER};
use crate::schema::{PlayDetails, PlayResult};
use once_cell::sync::Lazy;
use regex::Regex;

static PUNTER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"^({PLAYER})\s+punts"))]);

static RETURNER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"returned by\s+({PLAYER}?){CLAUSE_END}"))]);

static KICKER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"^({PLAYER})\s+kicks"))]);

static FIELD_GOAL_KICKER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"^({PLAYER})\s+"))]);

pub fn is_punt(text: &str) -> bool {
	text.contains("punts")
}

pub fn is_kickoff(text: &str) -> bool {
	text.contains("kicks off")
}

pub fn is_extra_point(text: &str) -> bool {
	text.contains("kicks extra point")
}

pub fn is_field_goal(text: &str) -> bool {
	text.contains("field goal")
}

/// Plain substring tests: "no" also hits inside longer words.
pub fn kick_result(text: &str) -> Option<PlayResult> {
	if text.contains("no") || text.contains("block") {
		Some(PlayResult::MissedKick)
	} else if text.contains("good") {
		Some(PlayResult::KickGood)
	} else {
		None
	}
}

pub fn extract_punt(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&PUNTER, text);
	details.receiver = first_name(&RETURNER, text);
	details.result = Some(PlayResult::Punt);
}

pub fn extract_kickoff(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&KICKER, text);
	details.result = Some(PlayResult::KickOff);
}

pub fn extract_extra_point(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&KICKER, text);
	details.result = kick_result(text);
}

pub fn extract_field_goal(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&FIELD_GOAL_KICKER, text);
	details.field_goal_yards = details.yards;
	details.result = kick_result(text);
}
