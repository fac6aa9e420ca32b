//! Demo dataset: three seeded patients with per-patient edge weights.
//! Unlike registration, which wires fixed default weights, the demo
//! data assigns a distinct affinity profile to each patient.

use std::collections::HashSet;

use oncograph_common::entities::{Parameter, PatientAttributes, Treatment};
use oncograph_common::error::Result;

use crate::store::{ClinicalGraph, NodeKind};

fn patient_1() -> PatientAttributes {
    PatientAttributes {
        age: 55,
        sex: "male".into(),
        prior_treatments: None,
        concurrent_malignancies: false,
        performance_status: 1,
        anc: 2000,
        platelets: 150_000,
        bilirubin: 1.0,
        ast: 30,
        alt: 25,
        creatinine: 1.2,
        creatinine_clearance: 70,
        cancer_type: "lung".into(),
        cancer_stage: "II".into(),
        comorbidities: HashSet::new(),
        weight_loss: false,
        nutritional_status: "good".into(),
        mental_health: "stable".into(),
        tumor_marker: None,
    }
}

fn patient_2() -> PatientAttributes {
    PatientAttributes {
        age: 70,
        sex: "female".into(),
        prior_treatments: Some("chemotherapy".into()),
        concurrent_malignancies: false,
        performance_status: 2,
        anc: 1600,
        platelets: 120_000,
        bilirubin: 1.6,
        ast: 50,
        alt: 45,
        creatinine: 1.8,
        creatinine_clearance: 50,
        cancer_type: "breast".into(),
        cancer_stage: "III".into(),
        comorbidities: HashSet::from(["diabetes".to_string()]),
        weight_loss: true,
        nutritional_status: "moderate".into(),
        mental_health: "anxious".into(),
        tumor_marker: Some("CA-125".into()),
    }
}

fn patient_3() -> PatientAttributes {
    PatientAttributes {
        age: 40,
        sex: "male".into(),
        prior_treatments: Some("immunotherapy".into()),
        concurrent_malignancies: true,
        performance_status: 0,
        anc: 1800,
        platelets: 130_000,
        bilirubin: 0.9,
        ast: 20,
        alt: 18,
        creatinine: 1.0,
        creatinine_clearance: 80,
        cancer_type: "colon".into(),
        cancer_stage: "I".into(),
        comorbidities: HashSet::new(),
        weight_loss: false,
        nutritional_status: "excellent".into(),
        mental_health: "stable".into(),
        tumor_marker: None,
    }
}

/// Insert the three demo patients and their affinity edges into
/// `graph`. The graph must not already contain patient nodes.
pub fn seed_demo_patients(graph: &mut ClinicalGraph) -> Result<()> {
    graph.add_node("patient_1", NodeKind::Patient(Box::new(patient_1())))?;
    graph.add_node("patient_2", NodeKind::Patient(Box::new(patient_2())))?;
    graph.add_node("patient_3", NodeKind::Patient(Box::new(patient_3())))?;

    graph.add_edge("patient_1", Parameter::TumorSize.as_str(), 0.7)?;
    graph.add_edge("patient_1", Parameter::HealthScore.as_str(), 0.8)?;
    graph.add_edge("patient_1", Treatment::Chemotherapy.as_str(), 0.5)?;

    graph.add_edge("patient_2", Parameter::TumorSize.as_str(), 0.9)?;
    graph.add_edge("patient_2", Parameter::HealthScore.as_str(), 0.4)?;
    graph.add_edge("patient_2", Treatment::Immunotherapy.as_str(), 0.3)?;

    graph.add_edge("patient_3", Parameter::TumorSize.as_str(), 0.6)?;
    graph.add_edge("patient_3", Parameter::HealthScore.as_str(), 0.9)?;
    graph.add_edge("patient_3", Treatment::Radiation.as_str(), 0.8)?;

    Ok(())
}

/// A fresh graph pre-loaded with the demo dataset.
pub fn demo_graph() -> Result<ClinicalGraph> {
    let mut graph = ClinicalGraph::new();
    seed_demo_patients(&mut graph)?;
    Ok(graph)
}
