use crate::error::DriveDetailsError;
use crate::schema::{GameInfo, GameRows, PlayRecord, COLUMNS};
use csv::Writer;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum GameInput {
	Many(Vec<GameRows>),
	One(GameRows),
}

/// Accepts a single game object or an array of them.
pub fn parse_games_json(json: &str) -> Result<Vec<GameRows>, DriveDetailsError> {
	let games = match serde_json::from_str(json)? {
		GameInput::Many(games) => games,
		GameInput::One(game) => vec![game],
	};

	if games.is_empty() {
		return Err(DriveDetailsError::NoGames);
	}
	Ok(games)
}

pub fn read_games(path: &Path) -> Result<Vec<GameRows>, DriveDetailsError> {
	let json = fs::read_to_string(path)?;
	parse_games_json(&json)
}

/// CSV sink in the drive details column layout. The header is written on
/// creation.
pub struct RecordWriter<W: Write> {
	writer: Writer<W>,
	keep_empty: bool,
	written: usize,
}

impl<W: Write> RecordWriter<W> {
	pub fn new(inner: W, keep_empty: bool) -> Result<Self, DriveDetailsError> {
		let mut writer = Writer::from_writer(inner);
		writer.write_record(COLUMNS)?;
		Ok(RecordWriter {
			writer,
			keep_empty,
			written: 0,
		})
	}

	/// Writes one game's records and returns how many made it out. Rows with
	/// no detail text are skipped unless the writer keeps empty rows.
	pub fn write_game(&mut self, game: &GameInfo, records: &[PlayRecord]) -> Result<usize, DriveDetailsError> {
		let mut count = 0;
		for record in records.iter().filter(|record| self.keep_empty || record.has_play()) {
			self.writer.write_record(record.to_row(game))?;
			count += 1;
		}
		self.written += count;
		Ok(count)
	}

	pub fn finish(mut self) -> Result<usize, DriveDetailsError> {
		self.writer.flush()?;
		Ok(self.written)
	}
}
