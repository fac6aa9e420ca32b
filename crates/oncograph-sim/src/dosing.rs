//! Pharmacokinetic dosing course.
//!
//! First-order elimination (rate = ln 2 / half-life) with a bolus dose
//! administered on a fixed interval. Tumor size shrinks in proportion
//! to circulating concentration; the health score declines only while
//! the concentration sits above the toxicity threshold. Defaults model
//! a doxorubicin course.

use serde::{Deserialize, Serialize};

use oncograph_common::error::{OncographError, Result};

use crate::MAX_SIM_STEPS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DosingParams {
    /// Bolus dose, mg/m².
    pub dose: f64,
    /// Days between doses.
    pub dose_interval_days: usize,
    /// Elimination half-life, days.
    pub half_life_days: f64,
    /// Tumor reduction per unit concentration per day.
    pub therapeutic_effect_rate: f64,
    /// Health decline per unit concentration above threshold per day.
    pub side_effect_rate: f64,
    /// Concentration above which toxicity sets in, mg/m².
    pub toxicity_threshold: f64,
    /// Initial tumor size, cm³.
    pub initial_tumor_size: f64,
    /// Initial health score.
    pub initial_health_score: f64,
    /// Course length in days.
    pub days: usize,
}

impl Default for DosingParams {
    /// Doxorubicin 60 mg/m² every 21 days, ~30 h half-life.
    fn default() -> Self {
        Self {
            dose: 60.0,
            dose_interval_days: 21,
            half_life_days: 1.25,
            therapeutic_effect_rate: 0.05,
            side_effect_rate: 0.03,
            toxicity_threshold: 10.0,
            initial_tumor_size: 100.0,
            initial_health_score: 70.0,
            days: 180,
        }
    }
}

impl DosingParams {
    /// Range checks on request-supplied parameters. The day count
    /// bounds the allocation; the half-life feeds the elimination
    /// exponent so it must be a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.days > MAX_SIM_STEPS {
            return Err(OncographError::Validation(format!(
                "days must be at most {MAX_SIM_STEPS}, got {}",
                self.days
            )));
        }
        if !self.half_life_days.is_finite() || self.half_life_days <= 0.0 {
            return Err(OncographError::Validation(format!(
                "half_life_days must be a positive finite number, got {}",
                self.half_life_days
            )));
        }
        for (name, value) in [
            ("dose", self.dose),
            ("therapeutic_effect_rate", self.therapeutic_effect_rate),
            ("side_effect_rate", self.side_effect_rate),
            ("toxicity_threshold", self.toxicity_threshold),
            ("initial_tumor_size", self.initial_tumor_size),
            ("initial_health_score", self.initial_health_score),
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

/// Daily series produced by a simulated course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosingSeries {
    pub concentration: Vec<f64>,
    pub tumor_size: Vec<f64>,
    pub health_score: Vec<f64>,
}

/// Run the course day by day. Each series holds one entry per day.
pub fn simulate_dosing(params: &DosingParams) -> DosingSeries {
    let days = params.days.max(1);
    let elimination_rate = std::f64::consts::LN_2 / params.half_life_days;
    let decay = (-elimination_rate).exp();
    let interval = params.dose_interval_days.max(1);

    let mut concentration = Vec::with_capacity(days);
    let mut tumor_size = Vec::with_capacity(days);
    let mut health_score = Vec::with_capacity(days);

    let mut conc: f64 = 0.0;
    let mut tumor = params.initial_tumor_size;
    let mut health = params.initial_health_score;

    for day in 0..days {
        conc *= decay;
        if day % interval == 0 {
            conc += params.dose;
        }

        if conc > 0.0 {
            tumor = (tumor - params.therapeutic_effect_rate * conc).max(0.0);
        }
        if conc > params.toxicity_threshold {
            health = (health - params.side_effect_rate * (conc - params.toxicity_threshold)).max(0.0);
        }

        concentration.push(conc);
        tumor_size.push(tumor);
        health_score.push(health);
    }

    DosingSeries {
        concentration,
        tumor_size,
        health_score,
    }
}
