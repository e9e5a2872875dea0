use crate::schema::{GameClock, PlayRow, Quarter};
use std::str::FromStr;
use tracing::{debug, warn};

/// A time of 10:00 or later in overtime means a fresh period started...
const SECOND_OT_MIN_SECONDS: u32 = 600;
/// ...but only once the running minimum went below 5:00.
const FIRST_OT_LATE_SECONDS: u32 = 300;

/// Per game accumulator. Built fresh for every game and folded over its rows
/// in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodState {
	pub current_quarter: Quarter,
	pub overtime_period: u8,
	pub lowest_time_seen_in_ot: Option<u32>,
}

impl Default for PeriodState {
	fn default() -> Self {
		PeriodState {
			current_quarter: Quarter::FIRST,
			overtime_period: 0,
			lowest_time_seen_in_ot: None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal<'a> {
	OvertimeHeader,
	QuarterNumber(Quarter),
	OvertimeCell { time_remaining: Option<&'a str> },
}

impl<'a> Signal<'a> {
	fn from_row(row: &'a PlayRow) -> Option<Self> {
		if row.overtime_header.as_deref().is_some_and(|text| text.to_lowercase().contains("overtime")) {
			return Some(Signal::OvertimeHeader);
		}

		let quarter_text = row.quarter.as_deref()?.trim();
		if !quarter_text.is_empty() && quarter_text.bytes().all(|b| b.is_ascii_digit()) {
			return match Quarter::from_str(quarter_text) {
				Ok(quarter) => Some(Signal::QuarterNumber(quarter)),
				Err(e) => {
					warn!(quarter = quarter_text, error = %e, "ignoring quarter cell");
					None
				}
			};
		}
		if quarter_text.eq_ignore_ascii_case("ot") {
			return Some(Signal::OvertimeCell {
				time_remaining: row.time_remaining.as_deref(),
			});
		}
		None
	}
}

/// Assigns a quarter label to every row of one game. The source tables label
/// overtime inconsistently: sometimes with an "Overtime" header row per
/// period, sometimes only with "OT" in the quarter cell, in which case a
/// second overtime is inferred from the clock jumping back up.
#[derive(Debug, Default)]
pub struct PeriodTracker {
	state: PeriodState,
}

impl PeriodTracker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> PeriodState {
		self.state
	}

	/// Applies the row's signal, if any, and returns the quarter the row
	/// belongs to.
	pub fn observe(&mut self, row: &PlayRow) -> Quarter {
		match Signal::from_row(row) {
			Some(Signal::OvertimeHeader) => self.overtime_header(),
			Some(Signal::QuarterNumber(quarter)) => self.quarter_number(quarter),
			Some(Signal::OvertimeCell { time_remaining }) => self.overtime_cell(time_remaining),
			None => {}
		}
		self.state.current_quarter
	}

	fn overtime_header(&mut self) {
		self.state.overtime_period = self.state.overtime_period.saturating_add(1);
		let quarter = match self.state.overtime_period {
			1 => Quarter::OVERTIME,
			2 => Quarter::DOUBLE_OVERTIME,
			n => {
				debug!(overtime_period = n, "overtime header beyond the second period, quarter unchanged");
				return;
			}
		};
		self.state.current_quarter = quarter;
		self.state.lowest_time_seen_in_ot = None;
		debug!(%quarter, "overtime header row");
	}

	fn quarter_number(&mut self, quarter: Quarter) {
		if self.state.overtime_period == 0 {
			self.state.current_quarter = quarter;
		}
	}

	fn overtime_cell(&mut self, time_remaining: Option<&str>) {
		if !self.state.current_quarter.is_overtime() {
			self.state.current_quarter = Quarter::OVERTIME;
			self.state.overtime_period = 1;
			self.state.lowest_time_seen_in_ot = None;
			debug!("first OT quarter cell, entering overtime");
			return;
		}
		if self.state.current_quarter != Quarter::OVERTIME {
			return;
		}

		let Some(time_text) = time_remaining else {
			return;
		};
		// GameClock caps minutes at 15, so a longer clock counts as malformed.
		let seconds = match GameClock::from_str(time_text) {
			Ok(clock) => clock.total_seconds(),
			Err(e) => {
				warn!(time = time_text, error = %e, "failed to parse time remaining, quarter unchanged");
				return;
			}
		};

		match self.state.lowest_time_seen_in_ot {
			None => self.state.lowest_time_seen_in_ot = Some(seconds),
			Some(lowest) if seconds >= SECOND_OT_MIN_SECONDS && lowest < FIRST_OT_LATE_SECONDS => {
				self.state.current_quarter = Quarter::DOUBLE_OVERTIME;
				self.state.overtime_period = 2;
				self.state.lowest_time_seen_in_ot = Some(seconds);
				debug!(time = time_text, lowest, "clock reset in overtime, entering double overtime");
			}
			Some(lowest) => self.state.lowest_time_seen_in_ot = Some(lowest.min(seconds)),
		}
	}
}
