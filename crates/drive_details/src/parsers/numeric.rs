use crate::error::NumericError;

/// Parses an expected points cell. Only plain digits with at most one decimal
/// point are accepted; anything else, signs included, is rejected.
pub fn parse_expected_points(text: &str) -> Result<f64, NumericError> {
	let trimmed = text.trim();
	let mut digits = 0usize;
	let mut dots = 0usize;

	for ch in trimmed.chars() {
		match ch {
			'0'..='9' => digits += 1,
			'.' => dots += 1,
			_ => return Err(NumericError::not_numeric(trimmed)),
		}
	}
	if digits == 0 || dots > 1 {
		return Err(NumericError::not_numeric(trimmed));
	}

	trimmed.parse::<f64>().map_err(|_| NumericError::not_numeric(trimmed))
}

/// `None` for a missing or non-numeric cell.
pub fn expected_points(cell: Option<&str>) -> Option<f64> {
	cell.and_then(|text| parse_expected_points(text).ok())
}

/// Parses a captured yardage number, which may carry a leading minus.
pub fn parse_yards(text: &str) -> Result<i32, NumericError> {
	let trimmed = text.trim();
	let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
	if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
		return Err(NumericError::not_numeric(trimmed));
	}
	trimmed.parse::<i32>().map_err(|_| NumericError::out_of_range(trimmed))
}
