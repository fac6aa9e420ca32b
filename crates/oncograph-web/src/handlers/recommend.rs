//! Treatment recommendation endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use oncograph_common::entities::Treatment;
use oncograph_common::error::ApiError;
use oncograph_recommender::{rank, score_treatments, top_recommendation};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub patient_id: String,
    /// `[treatment, score]` pairs, descending by score.
    pub recommended_treatments: Vec<(Treatment, f64)>,
    /// Best treatment, absent when nothing scored above zero.
    pub top_recommendation: Option<Treatment>,
}

/// GET /recommend_treatments/{patient_id} — Score and rank all
/// treatments for one patient against the current graph snapshot.
pub async fn recommend_treatments(
    State(state): State<SharedState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;
    let ranked = rank(score_treatments(&graph, &patient_id)?);
    let top = top_recommendation(&ranked);

    Ok(Json(RecommendResponse {
        patient_id,
        recommended_treatments: ranked.into_iter().map(|s| (s.treatment, s.score)).collect(),
        top_recommendation: top,
    }))
}
