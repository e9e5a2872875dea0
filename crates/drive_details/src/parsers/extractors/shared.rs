use crate::parsers::normalize::player_name;
use crate::parsers::numeric::parse_yards;
use crate::parsers::patterns::compile;
use crate::schema::PlayDetails;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Tried in order, first match wins.
static YARDS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
	[
		r"for (-?\d+) yards?",
		r"(-?\d+) yard (?:gain|loss)",
		r"loses (-?\d+) yards?",
		r"gains (\d+) yards?",
		r"punts (\d+) yards",
		r"\s+(\d+)\s+yard\s+field\s+goal",
	]
	.into_iter()
	.map(compile)
	.collect()
});

static TACKLE_BY: Lazy<Regex> = Lazy::new(|| compile(r"tackle by\s+([^)]+)"));

static DEFENDED_BY: Lazy<Regex> = Lazy::new(|| compile(r"defended by\s+([a-z][a-z'.\-]*(?:\s+[a-z][a-z'.\-]+)*)"));

/// Yardage of the play. "no gain" wins over any number in the text.
pub fn extract_yards(text: &str) -> Option<i32> {
	if text.contains("no gain") {
		return Some(0);
	}

	let caps = YARDS_PATTERNS.iter().find_map(|re| re.captures(text))?;
	match parse_yards(&caps[1]) {
		Ok(yards) => Some(yards),
		Err(e) => {
			warn!(error = %e, "discarding yardage");
			None
		}
	}
}

/// Tacklers and pass defender. Applies to every play category.
pub fn extract_defense(text: &str, details: &mut PlayDetails) {
	if let Some(caps) = TACKLE_BY.captures(text) {
		let mut tacklers = caps[1].trim().split(" and ");
		details.tackler = tacklers.next().and_then(player_name);
		details.tackler2 = tacklers.next().and_then(player_name);
	}

	if let Some(caps) = DEFENDED_BY.captures(text) {
		details.defender = player_name(&caps[1]);
	}
}
