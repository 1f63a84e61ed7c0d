use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, seed::seed};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Builds the full application router over a freshly seeded in-memory database.
///
/// The context is returned alongside the router so the database outlives the requests.
async fn seeded_app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await.unwrap();

    let app = router(AppState::new(db.clone()));

    (test, app)
}

/// Sends one request through the router and returns the status and JSON body.
///
/// A body that is not JSON is returned as `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn msg(text: &str) -> Value {
    json!({ "msg": text })
}

fn review_ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|review| review["review_id"].as_i64().unwrap())
        .collect()
}
