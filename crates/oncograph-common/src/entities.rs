/// Core entity types shared by the clinical graph and the recommender.
/// These are the typed replacements for the open-ended attribute bags
/// the prototype attached to graph nodes.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Treatment
// ---------------------------------------------------------------------------

/// The fixed treatment modalities the graph knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Chemotherapy,
    Immunotherapy,
    Radiation,
}

impl Treatment {
    /// All treatments, in graph seeding order.
    pub const ALL: [Treatment; 3] = [
        Treatment::Chemotherapy,
        Treatment::Immunotherapy,
        Treatment::Radiation,
    ];

    /// Serialize to the node identifier stored in the graph.
    pub fn as_str(&self) -> &'static str {
        match self {
            Treatment::Chemotherapy  => "chemotherapy",
            Treatment::Immunotherapy => "immunotherapy",
            Treatment::Radiation     => "radiation",
        }
    }

    /// Parse from a node identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "chemotherapy"  => Some(Treatment::Chemotherapy),
            "immunotherapy" => Some(Treatment::Immunotherapy),
            "radiation"     => Some(Treatment::Radiation),
            _               => None,
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Clinical parameter
// ---------------------------------------------------------------------------

/// Non-treatment parameter nodes a patient is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    TumorSize,
    HealthScore,
}

impl Parameter {
    pub const ALL: [Parameter; 2] = [Parameter::TumorSize, Parameter::HealthScore];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::TumorSize   => "tumor_size",
            Parameter::HealthScore => "health_score",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tumor_size"   => Some(Parameter::TumorSize),
            "health_score" => Some(Parameter::HealthScore),
            _              => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Node variant tag
// ---------------------------------------------------------------------------

/// Discriminant for the three node families in the clinical graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVariant {
    Patient,
    Treatment,
    Parameter,
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

/// Fully populated patient record, fixed at registration time.
/// Labs use the units the intake form collects them in: ANC in
/// cells/µL, platelets in cells/µL, bilirubin and creatinine in mg/dL,
/// AST/ALT in U/L, creatinine clearance in mL/min.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientAttributes {
    pub age: u32,
    pub sex: String,
    pub prior_treatments: Option<String>,
    pub concurrent_malignancies: bool,
    /// ECOG performance status, 0 (fully active) to 5 (dead).
    pub performance_status: u8,
    pub anc: u32,
    pub platelets: u32,
    pub bilirubin: f64,
    pub ast: u32,
    pub alt: u32,
    pub creatinine: f64,
    pub creatinine_clearance: u32,
    pub cancer_type: String,
    pub cancer_stage: String,
    pub comorbidities: HashSet<String>,
    pub weight_loss: bool,
    pub nutritional_status: String,
    pub mental_health: String,
    pub tumor_marker: Option<String>,
}

impl PatientAttributes {
    /// Range checks beyond what the types already guarantee.
    /// Unsigned lab counts cannot go negative; the floating-point labs
    /// and the ECOG scale still need explicit bounds.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.performance_status > 5 {
            return Err(crate::error::OncographError::Validation(format!(
                "performance_status must be 0-5 (ECOG), got {}",
                self.performance_status
            )));
        }
        if self.bilirubin < 0.0 {
            return Err(crate::error::OncographError::Validation(format!(
                "bilirubin must be non-negative, got {}",
                self.bilirubin
            )));
        }
        if self.creatinine < 0.0 {
            return Err(crate::error::OncographError::Validation(format!(
                "creatinine must be non-negative, got {}",
                self.creatinine
            )));
        }
        Ok(())
    }
}
