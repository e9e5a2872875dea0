pub mod error;
pub mod export;
pub mod parsers;
pub mod schema;

pub use error::DriveDetailsError;
pub use parsers::{parse_detail, parse_game, parse_games, GameParser, PeriodState, PeriodTracker};
pub use schema::{GameInfo, GameRows, PlayDetails, PlayRecord, PlayRow, COLUMNS};
