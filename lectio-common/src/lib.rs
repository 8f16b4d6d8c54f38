//! # Lectio Common Library
//!
//! Shared code for the Lectio daily reading service:
//! - Reading data model (poems, essays, catalog metadata)
//! - Error type
//! - Configuration loading (TOML + environment overrides)
//! - Calendar day and daily seed utilities

pub mod config;
pub mod error;
pub mod models;
pub mod time;

pub use error::{Error, Result};
pub use models::{DailyReadings, EssayMetadata, PoemCandidate, Reading, ReadingKind};
pub use time::DailySeed;
