use crate::schema::{PlayDetails, PlayResult};

/// Last word on the result: a touchdown always wins, a fumble only fills an
/// empty result.
pub fn resolve(text: &str, details: &mut PlayDetails) {
	if text.contains("touchdown") {
		details.result = Some(PlayResult::Touchdown);
	} else if text.contains("fumble") && details.result.is_none() {
		details.result = Some(PlayResult::Fumble);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve() {
		let test_cases = vec![
			("x pass complete to y for 15 yards, touchdown", Some(PlayResult::Complete), Some(PlayResult::Touchdown)),
			("x right end for 3 yards, touchdown. x fumbles", Some(PlayResult::Gain), Some(PlayResult::Touchdown)),
			("x penalty, touchdown nullified", Some(PlayResult::PenaltyAccepted), Some(PlayResult::Touchdown)),
			("x fumbles, recovered by y", None, Some(PlayResult::Fumble)),
			("x right end for 3 yards, fumbles", Some(PlayResult::Gain), Some(PlayResult::Gain)),
			("x right end for 3 yards", None, None),
		];

		for (input, before, expected) in test_cases {
			let mut details = PlayDetails {
				result: before,
				..Default::default()
			};
			resolve(input, &mut details);
			assert_eq!(details.result, expected, "Failed for input: {}", input);
		}
	}
}
