//! Graph statistics endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use oncograph_common::entities::NodeVariant;
use oncograph_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub patient_count: usize,
    pub treatment_count: usize,
    pub parameter_count: usize,
}

/// GET /api/graph/stats — Node and edge counts by variant.
pub async fn graph_stats(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let graph = state.graph.read().await;

    Ok(Json(GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        patient_count: graph.patient_count(),
        treatment_count: graph.nodes_of_variant(NodeVariant::Treatment).len(),
        parameter_count: graph.nodes_of_variant(NodeVariant::Parameter).len(),
    }))
}
