mod config;

use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use drive_details::export::{read_games, RecordWriter};
use drive_details::{parse_games, DriveDetailsError, GameRows, PlayRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn init_tracing(config: &Config) -> anyhow::Result<()> {
	let filter = EnvFilter::try_new(&config.rust_log).with_context(|| format!("invalid log filter {:?}", config.rust_log))?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(io::stderr)
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
	Ok(())
}

fn write_csv<W: Write>(out: W, games: &[GameRows], parsed: &[Vec<PlayRecord>], keep_empty: bool) -> Result<usize, DriveDetailsError> {
	let mut writer = RecordWriter::new(out, keep_empty)?;
	for (game, records) in games.iter().zip(parsed) {
		writer.write_game(&game.game, records)?;
	}
	writer.finish()
}

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let games = read_games(&config.input).with_context(|| format!("failed to read games from {}", config.input.display()))?;
	info!(games = games.len(), input = %config.input.display(), "parsing drive details");

	let parsed = parse_games(&games);

	let written = match &config.output {
		Some(path) => {
			let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
			write_csv(BufWriter::new(file), &games, &parsed, config.keep_empty_rows).with_context(|| format!("failed to write {}", path.display()))?
		}
		None => write_csv(io::stdout().lock(), &games, &parsed, config.keep_empty_rows).context("failed to write to stdout")?,
	};

	info!(rows = written, "drive details written");
	Ok(())
}
