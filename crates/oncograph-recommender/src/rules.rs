//! Clinical penalty rule table.
//!
//! Each rule is an independent (guard, penalty) pair; every rule whose
//! guard holds subtracts its penalty from the baseline weight. The
//! table order is fixed but only affects floating-point accumulation,
//! never which rules fire.

use oncograph_common::entities::{PatientAttributes, Treatment};

/// ANC floor below which myelosuppression is assumed, cells/µL.
const ANC_FLOOR: u32 = 1500;
/// Platelet floor, cells/µL.
const PLATELET_FLOOR: u32 = 100_000;
/// Bilirubin ceiling, mg/dL.
const BILIRUBIN_CEILING: f64 = 1.5;
/// AST/ALT ceiling, U/L. Both must be elevated to flag the liver.
const TRANSAMINASE_CEILING: u32 = 40;
/// Creatinine clearance floor, mL/min.
const CRCL_FLOOR: u32 = 60;
/// ECOG performance status above which all treatments are penalised.
const ECOG_CEILING: u8 = 2;

/// A named, independently evaluated penalty rule.
pub struct PenaltyRule {
    pub name: &'static str,
    pub penalty: f64,
    guard: fn(&PatientAttributes, Treatment) -> bool,
}

impl PenaltyRule {
    pub fn applies(&self, patient: &PatientAttributes, treatment: Treatment) -> bool {
        (self.guard)(patient, treatment)
    }
}

/// The rule table, in evaluation order.
pub const CLINICAL_RULES: &[PenaltyRule] = &[
    PenaltyRule {
        name: "myelosuppression",
        penalty: 0.3,
        guard: |p, _| p.anc < ANC_FLOOR || p.platelets < PLATELET_FLOOR,
    },
    PenaltyRule {
        name: "hepatic_impairment",
        penalty: 0.2,
        guard: |p, _| {
            p.bilirubin > BILIRUBIN_CEILING
                || (p.ast > TRANSAMINASE_CEILING && p.alt > TRANSAMINASE_CEILING)
        },
    },
    PenaltyRule {
        name: "renal_impairment",
        penalty: 0.3,
        guard: |p, _| p.creatinine_clearance < CRCL_FLOOR,
    },
    PenaltyRule {
        name: "poor_performance_status",
        penalty: 0.4,
        guard: |p, _| p.performance_status > ECOG_CEILING,
    },
    PenaltyRule {
        name: "diabetes_chemotherapy",
        penalty: 0.2,
        guard: |p, t| t == Treatment::Chemotherapy && p.comorbidities.contains("diabetes"),
    },
    PenaltyRule {
        name: "malnutrition",
        penalty: 0.3,
        guard: |p, _| p.weight_loss || p.nutritional_status == "poor",
    },
];

/// Fold the rule table over a baseline weight. The result is clamped
/// to be non-negative.
pub fn apply_rules(
    baseline: f64,
    patient: &PatientAttributes,
    treatment: Treatment,
    rules: &[PenaltyRule],
) -> f64 {
    let total_penalty: f64 = rules
        .iter()
        .filter(|rule| rule.applies(patient, treatment))
        .map(|rule| rule.penalty)
        .sum();
    (baseline - total_penalty).max(0.0)
}
