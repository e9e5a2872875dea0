pub mod kicking;
pub mod pass;
pub mod run;
pub mod shared;
pub mod special;

pub use shared::{extract_defense, extract_yards};
