use crate::dlog;
use crate::report::WorkoutReport;
use crate::types::{Sample, Training};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const RUN_CAL_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_CAL_SPEED_SHIFT: f64 = 20.0;

const WLK_CAL_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_CAL_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_CAL_SPEED_SHIFT: f64 = 1.1;
const SWM_CAL_WEIGHT_MULTIPLIER: f64 = 2.0;

impl Training {
    /// Distance in km: actions times the kind's step length.
    pub fn distance(&self) -> f64 {
        f64::from(self.sample().actions) * self.kind().step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming derives it from the pool laps rather than from the strokes.
    pub fn mean_speed(&self) -> f64 {
        match *self {
            Self::Swimming {
                sample,
                pool_length_m,
                lap_count,
            } => pool_length_m * lap_count / M_IN_KM / sample.duration_h,
            Self::Running(sample) | Self::SportsWalking { sample, .. } => {
                self.distance() / sample.duration_h
            }
        }
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match *self {
            Self::Running(Sample {
                duration_h,
                weight_kg,
                ..
            }) => {
                (RUN_CAL_SPEED_MULTIPLIER * speed - RUN_CAL_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Self::SportsWalking {
                sample:
                    Sample {
                        duration_h,
                        weight_kg,
                        ..
                    },
                height_cm,
            } => {
                (WLK_CAL_WEIGHT_MULTIPLIER * weight_kg
                    + floor_div(speed.powi(2), height_cm)
                        * WLK_CAL_SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Self::Swimming {
                sample: Sample { weight_kg, .. },
                ..
            } => (speed + SWM_CAL_SPEED_SHIFT) * SWM_CAL_WEIGHT_MULTIPLIER * weight_kg,
        }
    }

    pub fn report(&self) -> WorkoutReport {
        let report = WorkoutReport {
            training_type: self.kind().display_name(),
            duration: self.sample().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };
        dlog!(
            "computed kind={} distance={} speed={} calories={}",
            self.kind().code(),
            report.distance,
            report.speed,
            report.calories
        );
        report
    }
}

/// Floor division of two floats, rounded the way a remainder-based
/// floor division does: `(a - a % b) / b`, then floored, snapping up when
/// the quotient landed just below an integer.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample(actions: u32, duration_h: f64, weight_kg: f64) -> Sample {
        Sample {
            actions,
            duration_h,
            weight_kg,
        }
    }

    #[test]
    fn running_figures() {
        let t = Training::Running(sample(15000, 1.0, 75.0));
        assert!((t.distance() - 9.75).abs() < EPS);
        assert!((t.mean_speed() - 9.75).abs() < EPS);
        assert!((t.spent_calories() - 699.75).abs() < EPS);
    }

    #[test]
    fn running_scales_with_duration() {
        let t = Training::Running(sample(15000, 2.0, 75.0));
        assert!((t.mean_speed() - 4.875).abs() < EPS);
        // (18 * 4.875 - 20) * 75 / 1000 * 2 * 60
        assert!((t.spent_calories() - 609.75).abs() < EPS);
    }

    #[test]
    fn walking_figures() {
        let t = Training::SportsWalking {
            sample: sample(9000, 1.0, 75.0),
            height_cm: 180.0,
        };
        assert!((t.distance() - 5.85).abs() < EPS);
        assert!((t.mean_speed() - 5.85).abs() < EPS);
        // 5.85^2 / 180 floors to 0, only the weight term remains.
        assert!((t.spent_calories() - 157.5).abs() < EPS);
    }

    #[test]
    fn walking_floors_speed_over_height() {
        let t = Training::SportsWalking {
            sample: sample(20000, 1.0, 70.0),
            height_cm: 100.0,
        };
        // speed 13 km/h, 169 / 100 floors to 1.
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        assert!((t.spent_calories() - expected).abs() < EPS);
    }

    #[test]
    fn swimming_figures() {
        let t = Training::Swimming {
            sample: sample(720, 1.0, 80.0),
            pool_length_m: 25.0,
            lap_count: 40.0,
        };
        assert!((t.distance() - 0.9936).abs() < EPS);
        assert!((t.mean_speed() - 1.0).abs() < EPS);
        assert!((t.spent_calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn swimming_speed_ignores_strokes() {
        let few = Training::Swimming {
            sample: sample(10, 0.5, 80.0),
            pool_length_m: 50.0,
            lap_count: 20.0,
        };
        let many = Training::Swimming {
            sample: sample(10_000, 0.5, 80.0),
            pool_length_m: 50.0,
            lap_count: 20.0,
        };
        assert!((few.mean_speed() - 2.0).abs() < EPS);
        assert!((few.mean_speed() - many.mean_speed()).abs() < EPS);
        assert!(few.distance() < many.distance());
    }

    #[test]
    fn report_carries_display_name() {
        let t = Training::SportsWalking {
            sample: sample(9000, 1.0, 75.0),
            height_cm: 180.0,
        };
        let r = t.report();
        assert_eq!(r.training_type, "SportsWalking");
        assert!((r.duration - 1.0).abs() < EPS);
        assert!((r.calories - t.spent_calories()).abs() < EPS);
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert!((floor_div(7.0, 2.0) - 3.0).abs() < EPS);
        assert!((floor_div(0.19, 1.0) - 0.0).abs() < EPS);
        assert!((floor_div(34.2225, 180.0) - 0.0).abs() < EPS);
        assert!((floor_div(900.0, 180.0) - 5.0).abs() < EPS);
        assert!((floor_div(-7.0, 2.0) - -4.0).abs() < EPS);
    }

    #[test]
    fn floor_div_snaps_quotient_below_an_integer() {
        // 1.0 / 0.1 rounds up to 10.0, but 0.1 fits only 9 times into 1.0.
        assert!(((1.0_f64 / 0.1).floor() - 10.0).abs() < EPS);
        assert!((floor_div(1.0, 0.1) - 9.0).abs() < EPS);
    }

    #[test]
    fn swimming_partial_lap() {
        let t = Training::Swimming {
            sample: sample(720, 1.0, 80.0),
            pool_length_m: 25.0,
            lap_count: 40.5,
        };
        assert!((t.mean_speed() - 1.0125).abs() < EPS);
        assert!((t.spent_calories() - 338.0).abs() < EPS);
    }
}
