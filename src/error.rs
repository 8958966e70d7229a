//! Errors raised while turning sensor packages into workout reports.

use crate::types::WorkoutKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type {code:?}; valid types: {valid}")]
    UnknownWorkoutType { code: String, valid: String },

    #[error("{kind} expects {expected} fields, got {got}")]
    FieldCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("{kind}: invalid {field} {value}: {reason}")]
    InvalidField {
        kind: WorkoutKind,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("field {position}: not a number: {value:?}")]
    InvalidNumber { position: usize, value: String },

    #[error("malformed package {0:?}, expected CODE:f1,f2,...")]
    MalformedPackage(String),
}

impl WorkoutError {
    pub(crate) fn unknown_type(code: &str) -> Self {
        let valid = WorkoutKind::ALL
            .iter()
            .map(|k| format!("\"{}\"", k.code()))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownWorkoutType {
            code: code.to_string(),
            valid,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
