use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use invest_goals_server::{api::app_router, build_state, config::Config};

async fn build_test_router() -> (Router, TempDir) {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_goal(app: &Router, name: &str, months: Vec<&str>, value: f64) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/investment-goals",
            &json!({ "name": name, "months": months, "value": value }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn liveness_reports_healthy() {
    let (app, _tmp) = build_test_router().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "investment-goals-api");
    assert!(body["uptime"].is_number());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _tmp) = build_test_router().await;

    let response = app.oneshot(get_request("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/investment-goals"].is_object());
    assert!(body["paths"]["/investment-goals/{id}"].is_object());
}

#[tokio::test]
async fn create_returns_record_with_computed_monthly_value() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Trip", vec!["JAN", "FEV"], 1000.0).await;
    assert_eq!(goal["id"], 1);
    assert_eq!(goal["name"], "Trip");
    assert_eq!(goal["months"], json!(["JAN", "FEV"]));
    assert_eq!(goal["value"], 1000.0);
    assert_eq!(goal["monthlyValue"], 500.0);
}

#[tokio::test]
async fn create_with_invalid_payload_returns_400_with_messages() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/investment-goals",
            &json!({ "name": "", "months": ["JAN", "JAN"], "value": -5.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("name must be between"));
    assert!(message.contains("months must not repeat"));
    assert!(message.contains("value must be a positive number"));
}

#[tokio::test]
async fn get_by_id_returns_404_for_missing_goal() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .oneshot(get_request("/investment-goals/42"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_numeric_id_is_rejected_as_client_error() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .oneshot(get_request("/investment-goals/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn replace_recomputes_monthly_value_and_404s_on_missing_id() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Trip", vec!["JAN", "FEV"], 1000.0).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/investment-goals/{}", goal["id"]),
            &json!({ "name": "Big trip", "months": ["MAR", "ABR", "MAI"], "value": 1000.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Big trip");
    assert_eq!(updated["months"], json!(["MAR", "ABR", "MAI"]));
    assert_eq!(updated["monthlyValue"], 333.33);

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/investment-goals/999",
            &json!({ "name": "Ghost", "months": ["JAN"], "value": 10.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_merges_fields_and_recomputes_monthly_value() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Trip", vec!["JAN", "FEV"], 1000.0).await;
    let uri = format!("/investment-goals/{}", goal["id"]);

    let response = app
        .clone()
        .oneshot(json_request(Method::PATCH, &uri, &json!({ "value": 1200.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let patched = body_json(response).await;
    assert_eq!(patched["value"], 1200.0);
    assert_eq!(patched["monthlyValue"], 600.0);
    assert_eq!(patched["months"], json!(["JAN", "FEV"]));

    let response = app
        .clone()
        .oneshot(json_request(Method::PATCH, &uri, &json!({ "name": "Car" })))
        .await
        .unwrap();
    let patched = body_json(response).await;
    assert_eq!(patched["name"], "Car");
    assert_eq!(patched["value"], 1200.0);
    assert_eq!(patched["monthlyValue"], 600.0);
}

#[tokio::test]
async fn patch_with_empty_payload_returns_400() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Trip", vec!["JAN"], 100.0).await;

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            &format!("/investment-goals/{}", goal["id"]),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_newest_first_and_honors_filters() {
    let (app, _tmp) = build_test_router().await;

    create_goal(&app, "Trip", vec!["JAN", "FEV"], 1000.0).await;
    create_goal(&app, "New car", vec!["MAR"], 5000.0).await;
    create_goal(&app, "House", vec!["JAN"], 9000.0).await;

    let response = app
        .clone()
        .oneshot(get_request("/investment-goals"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await;
    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["House", "New car", "Trip"]);

    let response = app
        .clone()
        .oneshot(get_request("/investment-goals?name=car"))
        .await
        .unwrap();
    let filtered = body_json(response).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["name"], "New car");

    let response = app
        .clone()
        .oneshot(get_request("/investment-goals?month=JAN"))
        .await
        .unwrap();
    let filtered = body_json(response).await;
    let names: Vec<&str> = filtered
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["House", "Trip"]);

    let response = app
        .oneshot(get_request("/investment-goals?month=XYZ"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_confirms_and_second_delete_returns_404() {
    let (app, _tmp) = build_test_router().await;

    let goal = create_goal(&app, "Trip", vec!["JAN"], 100.0).await;
    let uri = format!("/investment-goals/{}", goal["id"]);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].is_string());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
