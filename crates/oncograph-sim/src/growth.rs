//! Logistic tumor-growth model.
//!
//! Discrete-time logistic growth dN = r·N·(1 − N/K) with a constant
//! per-step therapy effect subtracted from the effective growth rate.
//! Sizes are clamped to [0, K] at every step.

use serde::{Deserialize, Serialize};

use oncograph_common::entities::Treatment;
use oncograph_common::error::{OncographError, Result};

use crate::MAX_SIM_STEPS;

/// Fraction the growth rate is reduced by under each therapy.
pub fn therapy_effect(treatment: Treatment) -> f64 {
    match treatment {
        Treatment::Chemotherapy  => 0.02,
        Treatment::Immunotherapy => 0.01,
        Treatment::Radiation     => 0.05,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Initial tumor size, arbitrary units.
    pub initial_size: f64,
    /// Carrying capacity K.
    pub carrying_capacity: f64,
    /// Base per-step growth rate r, before therapy.
    pub base_growth_rate: f64,
    /// Constant therapy effect subtracted from the effective rate.
    pub therapy_effect: f64,
    /// Number of time steps to simulate.
    pub steps: usize,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            initial_size: 1.0,
            carrying_capacity: 1000.0,
            base_growth_rate: 0.1,
            therapy_effect: 0.0,
            steps: 100,
        }
    }
}

impl GrowthParams {
    /// Range checks on request-supplied parameters. The step count
    /// bounds the allocation; the capacity divides the size at every
    /// step so it must be a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.steps > MAX_SIM_STEPS {
            return Err(OncographError::Validation(format!(
                "steps must be at most {MAX_SIM_STEPS}, got {}",
                self.steps
            )));
        }
        if !self.carrying_capacity.is_finite() || self.carrying_capacity <= 0.0 {
            return Err(OncographError::Validation(format!(
                "carrying_capacity must be a positive finite number, got {}",
                self.carrying_capacity
            )));
        }
        if !self.initial_size.is_finite() || self.initial_size < 0.0 {
            return Err(OncographError::Validation(format!(
                "initial_size must be non-negative and finite, got {}",
                self.initial_size
            )));
        }
        if !self.base_growth_rate.is_finite() || !self.therapy_effect.is_finite() {
            return Err(OncographError::Validation(
                "growth rate and therapy effect must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulate tumor size over time. Returns one value per step,
/// including the initial size; a step count of zero is treated as one,
/// so the series always holds at least the initial size.
pub fn simulate_growth(params: &GrowthParams) -> Vec<f64> {
    let steps = params.steps.max(1);
    let mut size = params.initial_size;
    let mut series = Vec::with_capacity(steps);
    series.push(size);

    for _ in 1..steps {
        let effective_rate =
            params.base_growth_rate * (1.0 - size / params.carrying_capacity) - params.therapy_effect;
        size += effective_rate * size;
        size = size.clamp(0.0, params.carrying_capacity);
        series.push(size);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length_matches_steps() {
        let series = simulate_growth(&GrowthParams::default());
        assert_eq!(series.len(), 100);
    }

    #[test]
    fn test_zero_steps_returns_initial_size_only() {
        let params = GrowthParams { steps: 0, ..Default::default() };
        let series = simulate_growth(&params);
        assert_eq!(series, vec![1.0]);
    }

    #[test]
    fn test_validate_caps_step_count() {
        let params = GrowthParams { steps: usize::MAX, ..Default::default() };
        assert!(params.validate().is_err());
        let params = GrowthParams { steps: MAX_SIM_STEPS, ..Default::default() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_capacity() {
        let params = GrowthParams { carrying_capacity: 0.0, ..Default::default() };
        assert!(params.validate().is_err());
        let params = GrowthParams { carrying_capacity: f64::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_rates() {
        let params = GrowthParams { base_growth_rate: f64::INFINITY, ..Default::default() };
        assert!(params.validate().is_err());
        let params = GrowthParams { initial_size: -1.0, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_untreated_tumor_grows_toward_capacity() {
        let params = GrowthParams { steps: 500, ..Default::default() };
        let series = simulate_growth(&params);
        let last = *series.last().unwrap();
        assert!(last > 900.0 && last <= 1000.0);
    }

    #[test]
    fn test_size_stays_bounded() {
        let params = GrowthParams { steps: 1000, ..Default::default() };
        for size in simulate_growth(&params) {
            assert!((0.0..=1000.0).contains(&size));
        }
    }

    #[test]
    fn test_stronger_therapy_means_smaller_tumor() {
        let base = GrowthParams::default();
        let chemo = GrowthParams {
            therapy_effect: therapy_effect(Treatment::Chemotherapy),
            ..base.clone()
        };
        let radiation = GrowthParams {
            therapy_effect: therapy_effect(Treatment::Radiation),
            ..base.clone()
        };
        let untreated = simulate_growth(&base);
        let with_chemo = simulate_growth(&chemo);
        let with_radiation = simulate_growth(&radiation);
        assert!(with_chemo.last() < untreated.last());
        assert!(with_radiation.last() < with_chemo.last());
    }

    #[test]
    fn test_overwhelming_therapy_drives_size_to_zero() {
        let params = GrowthParams {
            therapy_effect: 1.5,
            steps: 50,
            ..Default::default()
        };
        let series = simulate_growth(&params);
        assert_eq!(*series.last().unwrap(), 0.0);
    }
}
