use crate::parsers::normalize::player_name;
use regex::Regex;

/// One to four name words. Matched against normalized (lowercase) text, so
/// the character classes only list lowercase letters.
pub const PLAYER: &str = r"(?:[a-z][a-z'.\-]*\s*){1,4}";

/// Names anchored on a following keyword: one or more words, no trailing
/// whitespace.
pub const NAME_WORDS: &str = r"[a-z][a-z'.\-]+(?:\s+[a-z][a-z'.\-]+)*?";

/// What may follow a name inside a clause: `for`, `is`, an opening
/// parenthesis, a period or the end of the text.
pub const CLAUSE_END: &str = r"\s*(?:\s+for|\s+is|\s+\(|$|\.)";

pub fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap()
}

pub fn compile_all(patterns: &[String]) -> Vec<Regex> {
	patterns.iter().map(|pattern| compile(pattern)).collect()
}

/// First capture group of the first pattern that matches.
pub fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
	patterns.iter().find_map(|re| re.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str()))
}

/// Title-cased player name from the first matching pattern.
pub fn first_name(patterns: &[Regex], text: &str) -> Option<String> {
	first_capture(patterns, text).and_then(player_name)
}
