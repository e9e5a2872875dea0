use super::pass::pass_location;
use super::run::run_location;
use crate::parsers::normalize::player_name;
use crate::parsers::patterns::{compile, first_name, NAME_WORDS, PLAYER};
use crate::schema::{PlayDetails, PlayResult};
use once_cell::sync::Lazy;
use regex::Regex;

const TWO_POINT_MARKER: &str = "two point attempt:";

static TWO_POINT_PLAYER: Lazy<Vec<Regex>> =
	Lazy::new(|| vec![compile(&format!(r"two point attempt:\s+({NAME_WORDS})\s+(?:pass|left|right|runs|rushed|up|rushes)"))]);

static TWO_POINT_RECEIVER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"(?:complete to|incomplete intended for)\s+({PLAYER})"))]);

static KNEELER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"^({NAME_WORDS})\s+kneels?"))]);

pub fn is_two_point(text: &str) -> bool {
	text.contains(TWO_POINT_MARKER)
}

pub fn is_aborted(text: &str) -> bool {
	text.contains("aborted")
}

pub fn is_kneel(text: &str) -> bool {
	text.contains("kneel")
}

/// Conversion attempt. Passing tries are told apart from runs by the word
/// "pass" anywhere in the text.
pub fn extract_two_point(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&TWO_POINT_PLAYER, text);

	if text.contains("pass") {
		details.receiver = first_name(&TWO_POINT_RECEIVER, text);
		details.pass_location = pass_location(text);
		details.result = if text.contains("complete") && text.contains("conversion succeeds") {
			Some(PlayResult::TwoPointConverted)
		} else if text.contains("incomplete") || text.contains("conversion fails") {
			Some(PlayResult::TwoPointFailed)
		} else {
			None
		};
	} else {
		if let Some((location, gap)) = run_location(text, true) {
			details.run_location = Some(location);
			details.run_gap = gap;
		}
		details.result = if text.contains("conversion succeeds") {
			Some(PlayResult::TwoPointConverted)
		} else if text.contains("conversion fails") {
			Some(PlayResult::TwoPointFailed)
		} else {
			None
		};
	}
}

pub fn extract_aborted(text: &str, details: &mut PlayDetails) {
	details.primary_player = text.split_once("aborted").and_then(|(before, _)| player_name(before));
	details.result = if text.contains("recovered") {
		Some(PlayResult::Recovered)
	} else {
		Some(PlayResult::Aborted)
	};
}

pub fn extract_kneel(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&KNEELER, text);
	details.result = Some(PlayResult::Kneel);
}
