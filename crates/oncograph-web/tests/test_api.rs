//! End-to-end tests for the HTTP facade, driven through the router
//! without a live socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use oncograph_web::router::build_router;
use oncograph_web::state::AppState;

fn app() -> Router {
    build_router(AppState::new())
}

fn demo_app() -> Router {
    build_router(AppState::with_demo_data().unwrap())
}

fn patient_body() -> Value {
    json!({
        "age": 55,
        "sex": "male",
        "prior_treatments": null,
        "concurrent_malignancies": false,
        "performance_status": 1,
        "anc": 2000,
        "platelets": 150000,
        "bilirubin": 1.0,
        "ast": 30,
        "alt": 25,
        "creatinine": 1.2,
        "creatinine_clearance": 70,
        "cancer_type": "lung",
        "cancer_stage": "II",
        "comorbidities": [],
        "weight_loss": false,
        "nutritional_status": "good",
        "mental_health": "stable",
        "tumor_marker": null
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_add_patient_returns_first_id() {
    let app = app();
    let resp = app
        .oneshot(post_json("/add_patient", &patient_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Patient added");
    assert_eq!(body["patient_id"], "patient_1");
}

#[tokio::test]
async fn test_add_then_recommend_round_trip() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(post_json("/add_patient", &patient_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/recommend_treatments/patient_1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["patient_id"], "patient_1");
    // Healthy patient, default wiring: chemotherapy keeps its 0.5
    // baseline and ranks first, the unwired treatments score zero.
    let ranked = body["recommended_treatments"].as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0][0], "chemotherapy");
    assert_eq!(ranked[0][1], 0.5);
    assert_eq!(body["top_recommendation"], "chemotherapy");
}

#[tokio::test]
async fn test_recommend_unknown_patient_is_404() {
    let resp = app()
        .oneshot(get("/recommend_treatments/patient_99"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Patient not found");
}

#[tokio::test]
async fn test_out_of_range_ecog_is_rejected() {
    let mut patient = patient_body();
    patient["performance_status"] = json!(6);

    let resp = app()
        .oneshot(post_json("/add_patient", &patient))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let mut patient = patient_body();
    patient.as_object_mut().unwrap().remove("anc");

    let resp = app()
        .oneshot(post_json("/add_patient", &patient))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_cytopenic_patient_scores_penalised_chemotherapy() {
    let mut patient = patient_body();
    patient["anc"] = json!(1200);
    patient["platelets"] = json!(90000);

    let app = app();
    app.clone()
        .oneshot(post_json("/add_patient", &patient))
        .await
        .unwrap();

    let resp = app
        .oneshot(get("/recommend_treatments/patient_1"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let ranked = body["recommended_treatments"].as_array().unwrap();
    // One 0.3 penalty against the 0.5 baseline
    assert_eq!(ranked[0][0], "chemotherapy");
    assert!((ranked[0][1].as_f64().unwrap() - 0.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_demo_patient_with_all_zero_scores_has_no_recommendation() {
    let resp = demo_app()
        .oneshot(get("/recommend_treatments/patient_2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let ranked = body["recommended_treatments"].as_array().unwrap();
    assert!(ranked.iter().all(|pair| pair[1] == 0.0));
    assert_eq!(body["top_recommendation"], Value::Null);
}

#[tokio::test]
async fn test_get_patient_returns_stored_attributes() {
    let app = demo_app();
    let resp = app.oneshot(get("/patients/patient_2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["cancer_type"], "breast");
    assert_eq!(body["performance_status"], 2);
}

#[tokio::test]
async fn test_graph_stats_reflect_seeded_store() {
    let resp = demo_app().oneshot(get("/api/graph/stats")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["treatment_count"], 3);
    assert_eq!(body["parameter_count"], 2);
    assert_eq!(body["patient_count"], 3);
    assert_eq!(body["edge_count"], 9);
}

#[tokio::test]
async fn test_growth_simulation_defaults() {
    let resp = app()
        .oneshot(post_json("/api/simulate/growth", &json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["tumor_size"].as_array().unwrap().len(), 100);
    assert_eq!(body["params"]["carrying_capacity"], 1000.0);
}

#[tokio::test]
async fn test_growth_simulation_rejects_unbounded_steps() {
    let resp = app()
        .oneshot(post_json(
            "/api/simulate/growth",
            &json!({ "steps": 18446744073709551615u64 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_growth_simulation_rejects_zero_capacity() {
    let resp = app()
        .oneshot(post_json(
            "/api/simulate/growth",
            &json!({ "carrying_capacity": 0.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dosing_simulation_rejects_zero_half_life() {
    let resp = app()
        .oneshot(post_json(
            "/api/simulate/dosing",
            &json!({ "half_life_days": 0.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trajectory_simulation_defaults() {
    let resp = app()
        .oneshot(post_json(
            "/api/simulate/trajectory",
            &json!({ "treatment": "immunotherapy", "days": 30 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["wbc_count"].as_array().unwrap().len(), 30);
    // Immunotherapy raises the WBC count from its 5000 baseline
    assert!(body["wbc_count"][29].as_f64().unwrap() > 5000.0);
}

#[tokio::test]
async fn test_trajectory_simulation_rejects_unbounded_days() {
    let resp = app()
        .oneshot(post_json(
            "/api/simulate/trajectory",
            &json!({ "days": 1000000000 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dosing_simulation_defaults() {
    let resp = app()
        .oneshot(post_json("/api/simulate/dosing", &json!({ "days": 30 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["concentration"].as_array().unwrap().len(), 30);
    assert_eq!(body["params"]["dose"], 60.0);
}
