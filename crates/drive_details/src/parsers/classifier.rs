use super::extractors::{kicking, pass, run, special};
use crate::schema::{PlayDetails, PlayType};
use tracing::debug;

/// One play category: a predicate over the normalized text and the
/// extractor that fills the category's fields.
pub struct Rule {
	pub name: &'static str,
	pub play_type: PlayType,
	pub matches: fn(&str) -> bool,
	pub extract: fn(&str, &mut PlayDetails),
}

/// Evaluated top-down, first match wins.
pub static RULES: [Rule; 9] = [
	Rule {
		name: "two point",
		play_type: PlayType::TwoPoint,
		matches: special::is_two_point,
		extract: special::extract_two_point,
	},
	Rule {
		name: "aborted",
		play_type: PlayType::Aborted,
		matches: special::is_aborted,
		extract: special::extract_aborted,
	},
	Rule {
		name: "run",
		play_type: PlayType::Run,
		matches: run::is_run,
		extract: run::extract_run,
	},
	Rule {
		name: "pass",
		play_type: PlayType::Pass,
		matches: pass::is_pass,
		extract: pass::extract_pass,
	},
	Rule {
		name: "punt",
		play_type: PlayType::Punt,
		matches: kicking::is_punt,
		extract: kicking::extract_punt,
	},
	Rule {
		name: "kickoff",
		play_type: PlayType::Kickoff,
		matches: kicking::is_kickoff,
		extract: kicking::extract_kickoff,
	},
	Rule {
		name: "extra point",
		play_type: PlayType::ExtraPoint,
		matches: kicking::is_extra_point,
		extract: kicking::extract_extra_point,
	},
	Rule {
		name: "field goal",
		play_type: PlayType::FieldGoal,
		matches: kicking::is_field_goal,
		extract: kicking::extract_field_goal,
	},
	Rule {
		name: "kneel",
		play_type: PlayType::Other,
		matches: special::is_kneel,
		extract: special::extract_kneel,
	},
];

pub fn classify(text: &str) -> Option<&'static Rule> {
	RULES.iter().find(|rule| (rule.matches)(text))
}

/// Sets the play type and runs the matching extractor. Leaves the play type
/// unset when no category applies.
pub fn apply(text: &str, details: &mut PlayDetails) -> Option<&'static Rule> {
	let rule = classify(text)?;
	debug!(rule = rule.name, "classified play");
	details.play_type = Some(rule.play_type);
	(rule.extract)(text, details);
	Some(rule)
}
