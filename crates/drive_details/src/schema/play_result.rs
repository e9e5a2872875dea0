use serde::Serialize;
use std::fmt;

macro_rules! labelled_enum {
	($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
		pub enum $name {
			$(
				#[serde(rename = $label)]
				$variant,
			)+
		}

		impl $name {
			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $label,)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

labelled_enum! {
	/// Outcome of a play, rendered with the labels used in the drive details
	/// sheets.
	PlayResult {
		Gain => "Gain",
		Loss => "Loss",
		NoGain => "No Gain",
		Complete => "Complete",
		Incomplete => "Incomplete",
		Interception => "Interception",
		Sack => "Sack",
		Touchdown => "Touchdown",
		Fumble => "Fumble",
		KickGood => "Kick Good",
		MissedKick => "Missed Kick",
		KickOff => "Kick Off",
		Punt => "Punt",
		Kneel => "Kneel",
		Recovered => "Recovered",
		Aborted => "Aborted",
		TwoPointConverted => "Two Point Converted",
		TwoPointFailed => "Two Point Failed",
		PenaltyAccepted => "Penalty Accepted",
		PenaltyDeclined => "Penalty Declined",
	}
}

labelled_enum! {
	PenaltyStatus {
		Accepted => "Accepted",
		Declined => "Declined",
	}
}

impl PenaltyStatus {
	/// Result a penalty-only row resolves to.
	pub fn as_result(self) -> PlayResult {
		match self {
			PenaltyStatus::Accepted => PlayResult::PenaltyAccepted,
			PenaltyStatus::Declined => PlayResult::PenaltyDeclined,
		}
	}
}
