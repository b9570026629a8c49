pub mod api;
pub mod config;
pub mod model;
pub mod prompt;
pub mod quiz;
pub mod render;

pub use config::Config;
pub use quiz::{Quiz, QuizOutcome};
