use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "drive-details", author, version)]
#[command(about = "Parses play-by-play drive details into structured CSV rows", long_about = None)]
pub struct Config {
	#[arg(long, env = "DRIVE_DETAILS_INPUT", value_name = "FILE", help = "JSON file with one game or an array of games")]
	pub input: PathBuf,

	#[arg(long, env = "DRIVE_DETAILS_OUTPUT", value_name = "FILE", help = "CSV output path, stdout when omitted")]
	pub output: Option<PathBuf>,

	#[arg(long, env = "DRIVE_DETAILS_KEEP_EMPTY", help = "Also write rows that carry no play detail")]
	pub keep_empty_rows: bool,

	#[arg(long, env = "RUST_LOG", default_value = "info", help = "Tracing filter directives")]
	pub rust_log: String,

	#[arg(long, env = "LOG_JSON", help = "Emit log lines as JSON")]
	pub log_json: bool,
}
