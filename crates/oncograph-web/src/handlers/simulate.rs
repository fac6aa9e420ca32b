//! Treatment-course simulation endpoints. Stateless: parameters in,
//! series out, nothing touches the graph.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use oncograph_common::error::ApiError;
use oncograph_sim::{
    simulate_dosing, simulate_growth, simulate_trajectory, DosingParams, DosingSeries,
    GrowthParams, TrajectoryParams, TrajectorySeries,
};

#[derive(Debug, Serialize)]
pub struct GrowthResponse {
    pub params: GrowthParams,
    pub tumor_size: Vec<f64>,
}

/// POST /api/simulate/growth — Logistic tumor-growth series.
/// Omitted body fields fall back to the model defaults.
pub async fn simulate_tumor_growth(
    Json(params): Json<GrowthParams>,
) -> Result<impl IntoResponse, ApiError> {
    params.validate()?;
    let tumor_size = simulate_growth(&params);
    Ok(Json(GrowthResponse { params, tumor_size }))
}

#[derive(Debug, Serialize)]
pub struct DosingResponse {
    pub params: DosingParams,
    #[serde(flatten)]
    pub series: DosingSeries,
}

/// POST /api/simulate/dosing — Pharmacokinetic dosing course.
pub async fn simulate_dosing_course(
    Json(params): Json<DosingParams>,
) -> Result<impl IntoResponse, ApiError> {
    params.validate()?;
    let series = simulate_dosing(&params);
    Ok(Json(DosingResponse { params, series }))
}

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub params: TrajectoryParams,
    #[serde(flatten)]
    pub series: TrajectorySeries,
}

/// POST /api/simulate/trajectory — Linear side-effect trajectories
/// for one treatment.
pub async fn simulate_treatment_trajectory(
    Json(params): Json<TrajectoryParams>,
) -> Result<impl IntoResponse, ApiError> {
    params.validate()?;
    let series = simulate_trajectory(&params);
    Ok(Json(TrajectoryResponse { params, series }))
}
