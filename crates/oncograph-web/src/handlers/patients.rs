//! Patient intake endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use oncograph_common::entities::PatientAttributes;
use oncograph_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AddPatientResponse {
    pub message: String,
    pub patient_id: String,
}

/// POST /add_patient — Register a patient and wire default edges.
pub async fn add_patient(
    State(state): State<SharedState>,
    Json(attrs): Json<PatientAttributes>,
) -> Result<impl IntoResponse, ApiError> {
    let mut graph = state.graph.write().await;
    let patient_id = state.registrar.register(&mut graph, attrs)?;

    Ok(Json(AddPatientResponse {
        message: "Patient added".to_string(),
        patient_id,
    }))
}

/// GET /patients/{patient_id} — Stored attributes for one patient.
pub async fn get_patient(
    State(state): State<SharedState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;
    let attrs = graph.patient(&patient_id)?.clone();
    Ok(Json(attrs))
}
