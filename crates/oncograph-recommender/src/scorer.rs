//! Per-treatment effectiveness scoring.

use serde::{Deserialize, Serialize};

use oncograph_common::entities::Treatment;
use oncograph_common::error::Result;
use oncograph_graph::ClinicalGraph;

use crate::rules::{apply_rules, CLINICAL_RULES};

/// One scored treatment. Serialized as a `[treatment, score]` pair on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentScore {
    pub treatment: Treatment,
    pub score: f64,
}

/// Score every treatment in the graph for `patient_id`.
///
/// The baseline is the patient-treatment edge weight (0.0 when no edge
/// exists); the clinical rule table is folded over it. Output order is
/// the graph's treatment-node insertion order; ranking is a separate
/// step. Read-only over the graph snapshot.
pub fn score_treatments(graph: &ClinicalGraph, patient_id: &str) -> Result<Vec<TreatmentScore>> {
    let patient = graph.patient(patient_id)?;

    Ok(graph
        .treatments()
        .map(|treatment| {
            let baseline = graph.edge_weight(patient_id, treatment.as_str());
            TreatmentScore {
                treatment,
                score: apply_rules(baseline, patient, treatment, CLINICAL_RULES),
            }
        })
        .collect())
}
