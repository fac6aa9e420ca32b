//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    patients::{add_patient, get_patient},
    recommend::recommend_treatments,
    simulate::{simulate_dosing_course, simulate_treatment_trajectory, simulate_tumor_growth},
    system::graph_stats,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Core recommender surface
        .route("/add_patient", post(add_patient))
        .route("/recommend_treatments/{patient_id}", get(recommend_treatments))
        .route("/patients/{patient_id}", get(get_patient))

        // API endpoints
        .route("/api/graph/stats", get(graph_stats))
        .route("/api/simulate/growth", post(simulate_tumor_growth))
        .route("/api/simulate/dosing", post(simulate_dosing_course))
        .route("/api/simulate/trajectory", post(simulate_treatment_trajectory))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
