use axum::http::StatusCode;
use serde_json::{Value, json};

use mockapi::error::LOAD_FIXTURE_USAGE;

use crate::helpers::{activate, scenario_tree, test_server};

// ── GET /load-fixture ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_activate_known_fixture() {
    let tree = scenario_tree();
    let (server, state) = test_server(&tree).await;

    let resp = server
        .get("/load-fixture")
        .add_query_param("name", "scenario-a")
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!({"message": "Loaded fixture scenario-a"}));
    assert_eq!(state.active_snapshot().name(), Some("scenario-a"));
}

#[tokio::test]
async fn should_activate_same_fixture_twice_identically() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;

    let first = server
        .get("/load-fixture")
        .add_query_param("name", "scenario-a")
        .await;
    let before = server.get("/users").await.json::<Value>();
    let second = server
        .get("/load-fixture")
        .add_query_param("name", "scenario-a")
        .await;
    let after = server.get("/users").await.json::<Value>();

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(first.json::<Value>(), second.json::<Value>());
    assert_eq!(before, after);
}

#[tokio::test]
async fn should_return_usage_when_name_missing() {
    let tree = scenario_tree();
    let (server, state) = test_server(&tree).await;
    activate(&server, "scenario-b").await;

    let requests = [
        server.get("/load-fixture"),
        server.get("/load-fixture").add_query_param("name", ""),
        server.get("/load-fixture").add_query_param("other", "1"),
    ];
    for request in requests {
        let resp = request.await;
        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.text(), LOAD_FIXTURE_USAGE);
    }

    assert_eq!(state.active_snapshot().name(), Some("scenario-b"));
}

#[tokio::test]
async fn should_not_activate_anything_when_name_missing_from_fresh_server() {
    let tree = scenario_tree();
    let (server, state) = test_server(&tree).await;

    let resp = server.get("/load-fixture").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert!(!state.active_snapshot().is_active());
}

#[tokio::test]
async fn should_list_catalog_for_unknown_fixture() {
    let tree = scenario_tree();
    let (server, state) = test_server(&tree).await;
    activate(&server, "scenario-a").await;

    let resp = server
        .get("/load-fixture")
        .add_query_param("name", "scenario-z")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    assert!(body["message"].as_str().unwrap().contains("scenario-z"));
    let fixtures = body["fixtures"].as_object().unwrap();
    assert_eq!(fixtures.len(), 2);
    assert_eq!(
        body["fixtures"]["scenario-a"]["/users/"]["jsonResponse"],
        json!({"id": 1})
    );
    assert_eq!(state.active_snapshot().name(), Some("scenario-a"));
}
