//! Finished-workout summaries and their one-line rendering.

use serde::Serialize;
use std::fmt;

/// Summary of one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    pub calories: f64,
}

impl WorkoutReport {
    /// One-line human readable summary, every figure with three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
