use crate::parsers::normalize::player_name;
use crate::parsers::patterns::{compile, compile_all, first_name, PLAYER};
use crate::schema::{Direction, PlayDetails, PlayResult, RunGap};
use once_cell::sync::Lazy;
use regex::Regex;

const RUN_TRIGGERS: [&str; 14] = [
	"left tackle for",
	"right tackle for",
	"left guard for",
	"right guard for",
	"left end for",
	"right end for",
	"up the middle for",
	"runs for",
	"rushed for",
	" middle run",
	" left run",
	" right run",
	"middle for",
	"scrambles",
];

static RUNNER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
	compile_all(&[
		format!(r"^({PLAYER})\s+(?:left|right|up the middle|runs|rushed)"),
		format!(r"^({PLAYER})\s+(?:tackle|guard|end)"),
		format!(r"^({PLAYER})\s+middle"),
	])
});

struct LocationRule {
	pattern: Regex,
	location: Direction,
	gap: Option<RunGap>,
	two_point: bool,
}

/// Ordered keyword table; the first hit decides location and gap.
static RUN_LOCATIONS: Lazy<Vec<LocationRule>> = Lazy::new(|| {
	let rule = |pattern: &str, location, gap, two_point| LocationRule {
		pattern: compile(pattern),
		location,
		gap,
		two_point,
	};
	vec![
		rule("left end", Direction::Left, Some(RunGap::End), true),
		rule("right end", Direction::Right, Some(RunGap::End), true),
		rule("left tackle", Direction::Left, Some(RunGap::Tackle), true),
		rule("right tackle", Direction::Right, Some(RunGap::Tackle), true),
		rule("left guard", Direction::Left, Some(RunGap::Guard), true),
		rule("right guard", Direction::Right, Some(RunGap::Guard), true),
		rule("up the middle", Direction::Middle, Some(RunGap::Middle), true),
		rule(" middle", Direction::Middle, Some(RunGap::Middle), true),
		rule(r" left\b", Direction::Left, None, true),
		rule(r" right\b", Direction::Right, None, true),
		rule("middle for", Direction::Middle, Some(RunGap::Middle), false),
	]
});

pub fn is_run(text: &str) -> bool {
	RUN_TRIGGERS.iter().any(|trigger| text.contains(trigger))
}

/// Location and gap of a run. Two-point tries skip the trailing
/// `middle for` entry.
pub fn run_location(text: &str, two_point: bool) -> Option<(Direction, Option<RunGap>)> {
	RUN_LOCATIONS
		.iter()
		.filter(|rule| rule.two_point || !two_point)
		.find(|rule| rule.pattern.is_match(text))
		.map(|rule| (rule.location, rule.gap))
}

pub fn extract_run(text: &str, details: &mut PlayDetails) {
	details.primary_player = match text.split_once("scrambles") {
		Some((before, _)) => player_name(before),
		None => first_name(&RUNNER_PATTERNS, text),
	};

	if let Some((location, gap)) = run_location(text, false) {
		details.run_location = Some(location);
		details.run_gap = gap;
	}

	if text.contains("no gain") {
		details.yards = Some(0);
		details.result = Some(PlayResult::NoGain);
	} else {
		details.result = match details.yards {
			Some(yards) if yards > 0 => Some(PlayResult::Gain),
			Some(yards) if yards < 0 => Some(PlayResult::Loss),
			_ => None,
		};
	}
}
