use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// Every kind, in the order the package codes are advertised.
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter code used by the sensor packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Label shown in the report line.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of numeric fields a package of this kind carries.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }

    /// Meters covered by one action (a step, or a stroke when swimming).
    pub const fn step_length_m(self) -> f64 {
        match self {
            Self::Swimming => 1.38,
            Self::Running | Self::SportsWalking => 0.65,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::unknown_type(code))
    }
}

/// Readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub actions: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Sample),
    SportsWalking {
        sample: Sample,
        height_cm: f64,
    },
    Swimming {
        sample: Sample,
        pool_length_m: f64,
        lap_count: f64,
    },
}

impl Training {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub const fn sample(&self) -> &Sample {
        match self {
            Self::Running(sample)
            | Self::SportsWalking { sample, .. }
            | Self::Swimming { sample, .. } => sample,
        }
    }
}
