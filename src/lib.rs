//! Workout statistics from raw sensor packages.
//!
//! A package is a three-letter type code plus positional readings.
//! [`package::read_package`] selects the formula set, [`types::Training`]
//! computes distance, speed and calories, and [`report::WorkoutReport`]
//! renders the summary line.

pub mod cli;
pub mod error;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::{Result, WorkoutError};
pub use package::{parse_package, read_package};
pub use report::WorkoutReport;
pub use types::{Sample, Training, WorkoutKind};
