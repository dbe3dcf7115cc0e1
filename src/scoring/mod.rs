pub mod badge;
pub mod bins;
pub mod config;
pub mod engine;
pub mod validation;

pub use badge::{assign_badge, Badge};
pub use bins::bin_points;
pub use config::*;
pub use engine::{score_row, ScoreResult, BINNED_COLUMNS};
pub use validation::validate_config;
