pub mod classifier;
pub mod extractors;
pub mod normalize;
pub mod numeric;
pub mod patterns;
pub mod penalty;
pub mod period;
pub mod play_parser;
pub mod result;

pub use classifier::{classify, Rule, RULES};
pub use normalize::normalize;
pub use period::{PeriodState, PeriodTracker};
pub use play_parser::{parse_detail, parse_game, parse_games, GameParser};
