pub mod game_clock;
pub mod play_record;
pub mod play_result;
pub mod play_row;
pub mod play_type;

pub use game_clock::*;
pub use play_record::*;
pub use play_result::*;
pub use play_row::*;
pub use play_type::*;
