//! Linear per-treatment side-effect trajectories.
//!
//! Coarse first-order model of how a treatment moves three markers
//! over a course: tumor size shrinks at a treatment-specific rate,
//! white blood cell count drops under cytotoxic regimens and rises
//! under immunotherapy, and creatinine creeps up with renal load.
//! Tumor size and WBC are clamped at zero.

use serde::{Deserialize, Serialize};

use oncograph_common::entities::Treatment;
use oncograph_common::error::{OncographError, Result};

use crate::MAX_SIM_STEPS;

/// Daily rates of change for one treatment: (tumor cm/day,
/// WBC cells/mm³/day, creatinine mg/dL/day).
fn daily_rates(treatment: Treatment) -> (f64, f64, f64) {
    match treatment {
        Treatment::Chemotherapy  => (-0.05, -50.0, 0.005),
        Treatment::Immunotherapy => (-0.02, 60.0, 0.002),
        Treatment::Radiation     => (-0.07, -20.0, 0.003),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryParams {
    pub treatment: Treatment,
    /// Course length in days.
    pub days: usize,
    /// Initial tumor size, cm.
    pub initial_tumor_size: f64,
    /// Initial white blood cell count, cells/mm³.
    pub initial_wbc_count: f64,
    /// Initial serum creatinine, mg/dL.
    pub initial_creatinine: f64,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            treatment: Treatment::Chemotherapy,
            days: 90,
            initial_tumor_size: 5.0,
            initial_wbc_count: 5000.0,
            initial_creatinine: 1.0,
        }
    }
}

impl TrajectoryParams {
    /// Range checks on request-supplied parameters.
    pub fn validate(&self) -> Result<()> {
        if self.days > MAX_SIM_STEPS {
            return Err(OncographError::Validation(format!(
                "days must be at most {MAX_SIM_STEPS}, got {}",
                self.days
            )));
        }
        for (name, value) in [
            ("initial_tumor_size", self.initial_tumor_size),
            ("initial_wbc_count", self.initial_wbc_count),
            ("initial_creatinine", self.initial_creatinine),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OncographError::Validation(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Daily marker series over a course, one entry per day starting at
/// day 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectorySeries {
    pub tumor_size: Vec<f64>,
    pub wbc_count: Vec<f64>,
    pub creatinine: Vec<f64>,
}

/// Project the three markers over the course.
pub fn simulate_trajectory(params: &TrajectoryParams) -> TrajectorySeries {
    let days = params.days.max(1);
    let (tumor_rate, wbc_rate, creatinine_rate) = daily_rates(params.treatment);

    let mut tumor_size = Vec::with_capacity(days);
    let mut wbc_count = Vec::with_capacity(days);
    let mut creatinine = Vec::with_capacity(days);

    for day in 1..=days {
        let d = day as f64;
        tumor_size.push((params.initial_tumor_size + tumor_rate * d).max(0.0));
        wbc_count.push((params.initial_wbc_count + wbc_rate * d).max(0.0));
        creatinine.push(params.initial_creatinine + creatinine_rate * d);
    }

    TrajectorySeries {
        tumor_size,
        wbc_count,
        creatinine,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths_match_days() {
        let series = simulate_trajectory(&TrajectoryParams::default());
        assert_eq!(series.tumor_size.len(), 90);
        assert_eq!(series.wbc_count.len(), 90);
        assert_eq!(series.creatinine.len(), 90);
    }

    #[test]
    fn test_chemotherapy_suppresses_wbc() {
        let series = simulate_trajectory(&TrajectoryParams::default());
        assert_eq!(series.wbc_count[0], 4950.0);
        assert_eq!(*series.wbc_count.last().unwrap(), 500.0);
    }

    #[test]
    fn test_immunotherapy_raises_wbc() {
        let params = TrajectoryParams {
            treatment: Treatment::Immunotherapy,
            ..Default::default()
        };
        let series = simulate_trajectory(&params);
        assert!(series.wbc_count.last().unwrap() > &5000.0);
    }

    #[test]
    fn test_radiation_shrinks_tumor_fastest() {
        let chemo = simulate_trajectory(&TrajectoryParams::default());
        let radiation = simulate_trajectory(&TrajectoryParams {
            treatment: Treatment::Radiation,
            ..Default::default()
        });
        assert!(radiation.tumor_size.last().unwrap() < chemo.tumor_size.last().unwrap());
    }

    #[test]
    fn test_creatinine_rises_monotonically() {
        let series = simulate_trajectory(&TrajectoryParams::default());
        for pair in series.creatinine.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_markers_clamp_at_zero_over_long_courses() {
        let params = TrajectoryParams { days: 1000, ..Default::default() };
        let series = simulate_trajectory(&params);
        assert_eq!(*series.tumor_size.last().unwrap(), 0.0);
        assert_eq!(*series.wbc_count.last().unwrap(), 0.0);
    }

    #[test]
    fn test_validate_caps_day_count() {
        let params = TrajectoryParams { days: usize::MAX, ..Default::default() };
        assert!(params.validate().is_err());
        assert!(TrajectoryParams::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_initials() {
        let params = TrajectoryParams {
            initial_wbc_count: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
