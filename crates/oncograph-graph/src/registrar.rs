//! Patient registration.
//!
//! Identifiers are `patient_<n>` with n taken from a monotonically
//! increasing atomic counter. Deriving n from the live patient count
//! would hand out duplicate ids under concurrent registration; the
//! counter never does.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use oncograph_common::entities::{Parameter, PatientAttributes, Treatment};
use oncograph_common::error::Result;

use crate::store::{ClinicalGraph, NodeKind};

/// Default edge weights wired for every newly registered patient.
/// These are fixed modeling defaults, not derived from the patient's
/// attributes.
pub const DEFAULT_TUMOR_SIZE_WEIGHT: f64 = 0.7;
pub const DEFAULT_HEALTH_SCORE_WEIGHT: f64 = 0.8;
pub const DEFAULT_CHEMOTHERAPY_WEIGHT: f64 = 0.5;

/// Allocates patient identifiers and inserts validated patient records
/// into the graph.
#[derive(Debug)]
pub struct PatientRegistrar {
    next_id: AtomicU64,
}

impl PatientRegistrar {
    /// Registrar for an empty store; the first patient is `patient_1`.
    pub fn new() -> Self {
        Self { next_id: AtomicU64::new(1) }
    }

    /// Registrar resuming after `graph` was seeded with patients out
    /// of band (e.g. the demo dataset).
    pub fn for_graph(graph: &ClinicalGraph) -> Self {
        Self {
            next_id: AtomicU64::new(graph.patient_count() as u64 + 1),
        }
    }

    /// Validate `attrs`, insert the patient node, and wire the default
    /// edges to tumor_size, health_score, and chemotherapy.
    pub fn register(&self, graph: &mut ClinicalGraph, attrs: PatientAttributes) -> Result<String> {
        attrs.validate()?;

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let patient_id = format!("patient_{n}");

        graph.add_node(&patient_id, NodeKind::Patient(Box::new(attrs)))?;
        graph.add_edge(&patient_id, Parameter::TumorSize.as_str(), DEFAULT_TUMOR_SIZE_WEIGHT)?;
        graph.add_edge(&patient_id, Parameter::HealthScore.as_str(), DEFAULT_HEALTH_SCORE_WEIGHT)?;
        graph.add_edge(&patient_id, Treatment::Chemotherapy.as_str(), DEFAULT_CHEMOTHERAPY_WEIGHT)?;

        info!(%patient_id, "registered patient");
        Ok(patient_id)
    }
}

impl Default for PatientRegistrar {
    fn default() -> Self {
        Self::new()
    }
}
