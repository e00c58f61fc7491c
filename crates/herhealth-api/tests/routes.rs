use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use herhealth_api::config::ApiConfig;
use herhealth_api::middleware::session::USER_HEADER;
use herhealth_api::{build_state, router};
use herhealth_instruments::breakdown::SignificanceThreshold;

fn config(data_dir: Option<std::path::PathBuf>) -> ApiConfig {
    ApiConfig {
        bind: "127.0.0.1:0".parse().unwrap(),
        data_dir,
        significance_threshold: SignificanceThreshold::default(),
    }
}

fn app() -> Router {
    router(build_state(&config(None)).unwrap())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, user: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user);
    }
    builder.body(Body::from(serde_json::to_vec(&body).unwrap())).unwrap()
}

fn get_as(uri: &str, user: &str) -> Request<Body> {
    Request::get(uri).header(USER_HEADER, user).body(Body::empty()).unwrap()
}

/// Poll until the background save lands, or give up after about a second.
async fn wait_for_records(app: &Router, user: &str, expected: usize) -> Value {
    for _ in 0..100 {
        let (status, body) = send(app, get_as("/assessments", user)).await;
        assert_eq!(status, StatusCode::OK);
        if body.as_array().map(Vec::len) == Some(expected) {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("expected {expected} records for {user}");
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_all_instruments() {
    let (status, body) = send(&app(), get("/instruments")).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<_> = body.as_array().unwrap().iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["pcos", "menstrual", "menopause"]);
    assert_eq!(body[2]["question_count"], 8);
}

#[tokio::test]
async fn instrument_detail_includes_questions_and_bands() {
    let (status, body) = send(&app(), get("/instruments/menopause")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 8);
    assert_eq!(body["bands"].as_array().unwrap().len(), 4);
    assert_eq!(body["max_option_score"], 3);

    let (status, _) = send(&app(), get("/instruments/thyroid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preview_scores_partial_answers() {
    let body = json!({ "answers": { "1": 3, "2": 3 } });
    let (status, body) = send(&app(), post_json("/instruments/pcos/preview", None, body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimate"]["normalized_score"], 29);
    assert_eq!(body["estimate"]["answered"], 2);
    assert_eq!(body["factors"].as_array().unwrap().len(), 7);
    assert_eq!(body["key_factors"], "Cycle Regularity, Hirsutism");
}

#[tokio::test]
async fn preview_rejects_unknown_questions() {
    let body = json!({ "answers": { "42": 1 } });
    let (status, body) = send(&app(), post_json("/instruments/pcos/preview", None, body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown question id 42");
}

#[tokio::test]
async fn submit_scores_and_persists_for_signed_in_user() {
    let app = app();
    let body = json!({
        "assessment_type": "menstrual",
        "answers": { "1": 2, "2": 2, "3": 2, "4": 2, "5": 2, "6": 2 }
    });
    let (status, body) = send(&app, post_json("/assessments", Some("user-7"), body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["normalized_score"], 67);
    assert_eq!(body["result"]["category"], "Needs Attention");
    assert_eq!(body["result"]["severity_level"], "high");
    assert_eq!(body["persisting"], true);
    assert!(!body["recommendation"]["foods_to_eat"].as_array().unwrap().is_empty());

    let records = wait_for_records(&app, "user-7", 1).await;
    assert_eq!(records[0]["assessment_type"], "menstrual");
    assert_eq!(records[0]["risk_score"], 67);
    assert_eq!(records[0]["risk_category"], "high");
    assert_eq!(records[0]["responses"]["4"], 2);
}

#[tokio::test]
async fn anonymous_submit_is_scored_but_not_persisted() {
    let body = json!({
        "assessment_type": "pcos",
        "answers": { "1": 0, "2": 0, "3": 0, "4": 0, "5": 0, "6": 0, "7": 0 }
    });
    let (status, body) = send(&app(), post_json("/assessments", None, body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["normalized_score"], 0);
    assert_eq!(body["persisting"], false);
    assert_eq!(body["key_factors"], "No major risk factors detected");
}

#[tokio::test]
async fn incomplete_submit_is_rejected() {
    let app = app();
    let body = json!({ "assessment_type": "pcos", "answers": { "1": 3, "2": 3, "3": 3 } });
    let (status, body) = send(&app, post_json("/assessments", Some("user-8"), body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "assessment incomplete: 3 of 7 questions answered");

    let (_, records) = send(&app, get_as("/assessments", "user-8")).await;
    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn history_requires_a_user() {
    let (status, _) = send(&app(), get("/assessments")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn file_backed_state_keeps_history_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(build_state(&config(Some(dir.path().to_path_buf()))).unwrap());

    let body = json!({
        "assessment_type": "menopause",
        "answers": { "1": 3, "2": 3, "3": 3, "4": 3, "5": 3, "6": 3, "7": 1, "8": 1 }
    });
    let (status, body) = send(&app, post_json("/assessments", Some("user-9"), body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["category"], "Menopausal/Post-menopausal");

    let records = wait_for_records(&app, "user-9", 1).await;
    assert_eq!(records[0]["risk_score"], 83);
    assert!(dir.path().join("health_assessments/user-9/menopause").is_dir());
}

#[tokio::test]
async fn recommendations_by_type_and_level() {
    let (status, body) = send(&app(), get("/recommendations/pcos/high")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendation"]["foods_to_eat"][0], "Very low-GI foods");
    assert_eq!(body["lifestyle_tips"].as_array().unwrap().len(), 3);

    let (status, _) = send(&app(), get("/recommendations/pcos/severe")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_ids_that_are_not_a_single_segment_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let app = router(build_state(&config(Some(data_dir.clone()))).unwrap());

    let body = json!({
        "assessment_type": "pcos",
        "answers": { "1": 1, "2": 1, "3": 1, "4": 1, "5": 1, "6": 1, "7": 1 }
    });
    let (status, body) = send(&app, post_json("/assessments", Some("../../escaped"), body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid user id: \"../../escaped\"");

    let (status, _) = send(&app, get_as("/assessments", "..")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!dir.path().join("escaped").exists());
    assert!(!data_dir.exists());
}

#[test]
fn config_defaults_and_overrides() {
    let defaults = ApiConfig::from_lookup(|_| None).unwrap();
    assert_eq!(defaults.bind.port(), 8080);
    assert!(defaults.data_dir.is_none());
    assert_eq!(defaults.significance_threshold, SignificanceThreshold(2));

    let custom = ApiConfig::from_lookup(|key| match key {
        "HERHEALTH_BIND" => Some("127.0.0.1:9000".to_string()),
        "HERHEALTH_DATA_DIR" => Some("/var/lib/herhealth".to_string()),
        "HERHEALTH_SIGNIFICANCE_THRESHOLD" => Some("3".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(custom.bind.port(), 9000);
    assert_eq!(custom.data_dir.unwrap().to_str(), Some("/var/lib/herhealth"));
    assert_eq!(custom.significance_threshold, SignificanceThreshold(3));

    assert!(ApiConfig::from_lookup(|key| (key == "HERHEALTH_BIND").then(|| "nope".to_string())).is_err());
}
