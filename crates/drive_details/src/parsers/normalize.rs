/// Lowercases the detail text and collapses every whitespace run into a
/// single space. Returns `None` when nothing but whitespace is left.
pub fn normalize(detail: Option<&str>) -> Option<String> {
	let normalized = detail?.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join(" ");

	if normalized.is_empty() {
		None
	} else {
		Some(normalized)
	}
}

/// Capitalizes the first letter of every word, lowercasing the rest. Any
/// non-letter starts a new word, so `o'neil` becomes `O'Neil` and `d.j.`
/// becomes `D.J.`.
pub fn title_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	let mut prev_is_letter = false;

	for ch in name.trim().chars() {
		if ch.is_alphabetic() {
			if prev_is_letter {
				out.extend(ch.to_lowercase());
			} else {
				out.extend(ch.to_uppercase());
			}
			prev_is_letter = true;
		} else {
			out.push(ch);
			prev_is_letter = false;
		}
	}
	out
}

/// Title-cased name, or `None` when the captured text is blank.
pub fn player_name(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(title_case(trimmed))
	}
}
