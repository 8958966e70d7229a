//! Sensor packages: a type code plus positional readings.
//!
//! Textual form is `CODE:f1,f2,...`, e.g. `SWM:720,1,80,25,40`.

use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::types::{Sample, Training, WorkoutKind};

/// Packages processed when the caller supplies none.
pub const SAMPLE_PACKAGES: [&str; 3] = ["SWM:720,1,80,25,40", "RUN:15000,1,75", "WLK:9000,1,75,180"];

/// Pick the formula set for `code` and feed it `data` positionally.
///
/// Field order per code:
/// - `SWM`: actions, duration (h), weight (kg), pool length (m), lap count
/// - `RUN`: actions, duration (h), weight (kg)
/// - `WLK`: actions, duration (h), weight (kg), height (cm)
pub fn read_package(code: &str, data: &[f64]) -> Result<Training> {
    let kind: WorkoutKind = code.parse()?;
    if data.len() != kind.field_count() {
        return Err(WorkoutError::FieldCount {
            kind,
            expected: kind.field_count(),
            got: data.len(),
        });
    }

    let check = Check { kind };
    let sample = Sample {
        actions: check.count("actions", data[0])?,
        duration_h: check.positive("duration", data[1])?,
        weight_kg: check.non_negative("weight", data[2])?,
    };

    let training = match kind {
        WorkoutKind::Running => Training::Running(sample),
        WorkoutKind::SportsWalking => Training::SportsWalking {
            sample,
            height_cm: check.positive("height", data[3])?,
        },
        WorkoutKind::Swimming => Training::Swimming {
            sample,
            pool_length_m: check.non_negative("pool length", data[3])?,
            lap_count: check.non_negative("lap count", data[4])?,
        },
    };
    dlog!("package code={code} fields={data:?}");
    Ok(training)
}

/// Parse a `CODE:f1,f2,...` package and select its training.
pub fn parse_package(line: &str) -> Result<Training> {
    let Some((code, fields)) = line.split_once(':') else {
        return Err(WorkoutError::MalformedPackage(line.trim().to_string()));
    };
    let data = parse_fields(fields)?;
    read_package(code.trim(), &data)
}

fn parse_fields(fields: &str) -> Result<Vec<f64>> {
    if fields.trim().is_empty() {
        return Ok(Vec::new());
    }
    fields
        .split(',')
        .enumerate()
        .map(|(i, raw)| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| WorkoutError::InvalidNumber {
                    position: i + 1,
                    value: raw.trim().to_string(),
                })
        })
        .collect()
}

/// Lines of an input file worth parsing, with their 1-based line numbers.
pub fn package_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

struct Check {
    kind: WorkoutKind,
}

impl Check {
    fn invalid(&self, field: &'static str, value: f64, reason: &'static str) -> WorkoutError {
        WorkoutError::InvalidField {
            kind: self.kind,
            field,
            value,
            reason,
        }
    }

    fn positive(&self, field: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(self.invalid(field, value, "must be finite"));
        }
        if value <= 0.0 {
            return Err(self.invalid(field, value, "must be greater than zero"));
        }
        Ok(value)
    }

    fn non_negative(&self, field: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(self.invalid(field, value, "must be finite"));
        }
        if value < 0.0 {
            return Err(self.invalid(field, value, "must not be negative"));
        }
        Ok(value)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn count(&self, field: &'static str, value: f64) -> Result<u32> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(self.invalid(field, value, "must be a non-negative whole number"));
        }
        if value > f64::from(u32::MAX) {
            return Err(self.invalid(field, value, "is too large"));
        }
        Ok(value as u32)
    }
}
