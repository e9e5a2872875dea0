use crate::parsers::patterns::{compile, compile_all, first_name, CLAUSE_END, PLAYER};
use crate::schema::{Direction, PassDepth, PlayDetails, PlayResult};
use once_cell::sync::Lazy;
use regex::Regex;

static PASSER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(&[format!(r"^({PLAYER})\s+pass"), format!(r"^({PLAYER})\s+sacked")]));

static SACKED_BY: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"sacked by\s+({PLAYER}?){CLAUSE_END}"))]);

static RECEIVER: Lazy<Vec<Regex>> = Lazy::new(|| vec![compile(&format!(r"(?:intended for|complete to|incomplete to|to)\s+({PLAYER}?){CLAUSE_END}"))]);

pub fn is_pass(text: &str) -> bool {
	text.contains("pass complete")
		|| text.contains("pass incomplete")
		|| text.contains("sacked")
		|| (text.contains("pass") && (text.contains("to") || text.contains("intended for")))
}

/// Left, right or middle, in that order of precedence.
pub fn pass_location(text: &str) -> Option<Direction> {
	if text.contains(" left") {
		Some(Direction::Left)
	} else if text.contains(" right") {
		Some(Direction::Right)
	} else if text.contains(" middle") {
		Some(Direction::Middle)
	} else {
		None
	}
}

pub fn extract_pass(text: &str, details: &mut PlayDetails) {
	details.primary_player = first_name(&PASSER_PATTERNS, text);

	if text.contains("sacked") {
		details.sack_by = first_name(&SACKED_BY, text);
		details.result = Some(PlayResult::Sack);
		return;
	}

	details.receiver = first_name(&RECEIVER, text);

	details.pass_type = if text.contains("short") {
		Some(PassDepth::Short)
	} else if text.contains("deep") {
		Some(PassDepth::Deep)
	} else {
		None
	};
	details.pass_location = pass_location(text);

	if text.contains("incomplete") {
		details.result = Some(PlayResult::Incomplete);
	} else if text.contains("intercepted") {
		details.result = Some(PlayResult::Interception);
	} else if text.contains("complete") {
		details.result = Some(PlayResult::Complete);
		details.pass_yards = details.yards;
	}
}
