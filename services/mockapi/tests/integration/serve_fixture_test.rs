use axum::http::StatusCode;
use serde_json::{Value, json};

use mockapi_testing::fixture::FixtureTree;

use crate::helpers::{activate, scenario_tree, test_server};

// ── No fixture active ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_catalog_when_no_fixture_loaded() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;

    for uri in ["/", "/users", "/users/profile", "/orders"] {
        let resp = server.get(uri).await;
        assert_eq!(resp.status_code(), StatusCode::OK, "{uri}");
        let body = resp.json::<Value>();
        assert!(
            body["message"].as_str().unwrap().starts_with("No fixture is loaded"),
            "{uri}: {body}"
        );
        assert_eq!(body["fixtures"].as_object().unwrap().len(), 2);
        assert_eq!(
            body["fixtures"]["scenario-b"]["/orders/"]["jsonResponse"],
            json!([{"id": 10}, {"id": 11}])
        );
    }
}

// ── Active fixture ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_scenario_routes_after_activation() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;
    activate(&server, "scenario-a").await;

    let users = server.get("/users").await;
    assert_eq!(users.status_code(), StatusCode::OK);
    assert_eq!(users.json::<Value>(), json!({"id": 1}));

    let users_slash = server.get("/users/").await;
    assert_eq!(users_slash.json::<Value>(), json!({"id": 1}));

    let profile = server.get("/users/profile").await;
    assert_eq!(profile.json::<Value>(), json!({"bio": "x"}));
}

#[tokio::test]
async fn should_return_route_table_on_miss() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;
    activate(&server, "scenario-a").await;

    let resp = server.get("/orders").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body = resp.json::<Value>();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("/orders"));
    assert!(message.contains("scenario-a"));
    assert_eq!(
        body["fixtures"],
        json!({
            "/users/": { "jsonResponse": { "id": 1 } },
            "/users/profile/": { "jsonResponse": { "bio": "x" } },
        })
    );
}

#[tokio::test]
async fn should_switch_fixture_at_runtime() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;

    activate(&server, "scenario-a").await;
    assert_eq!(server.get("/users").await.json::<Value>(), json!({"id": 1}));

    activate(&server, "scenario-b").await;
    assert_eq!(
        server.get("/orders").await.json::<Value>(),
        json!([{"id": 10}, {"id": 11}])
    );
    let miss = server.get("/users").await.json::<Value>();
    assert!(miss["fixtures"].get("/orders/").is_some());
}

#[tokio::test]
async fn should_ignore_query_string_and_method() {
    let tree = scenario_tree();
    let (server, _) = test_server(&tree).await;
    activate(&server, "scenario-a").await;

    let with_query = server.get("/users").add_query_param("page", "2").await;
    assert_eq!(with_query.json::<Value>(), json!({"id": 1}));
    assert_eq!(server.post("/users").await.json::<Value>(), json!({"id": 1}));
    assert_eq!(server.delete("/users/profile").await.json::<Value>(), json!({"bio": "x"}));
}

#[tokio::test]
async fn should_serve_root_and_scalar_responses() {
    let tree = FixtureTree::new()
        .route("s", "", json!({"root": true}))
        .route("s", "feature/enabled", json!(false))
        .route("s", "feature/name", json!("beta"));
    let (server, _) = test_server(&tree).await;
    activate(&server, "s").await;

    assert_eq!(server.get("/").await.json::<Value>(), json!({"root": true}));
    assert_eq!(server.get("/feature/enabled").await.json::<Value>(), json!(false));
    assert_eq!(server.get("/feature/name").await.json::<Value>(), json!("beta"));
}

#[tokio::test]
async fn should_route_non_get_load_fixture_to_active_fixture() {
    let tree = FixtureTree::new().route("s", "load-fixture", json!({"shadow": true}));
    let (server, state) = test_server(&tree).await;
    activate(&server, "s").await;

    let resp = server
        .post("/load-fixture")
        .add_query_param("name", "other")
        .await;

    assert_eq!(resp.json::<Value>(), json!({"shadow": true}));
    assert_eq!(state.active_snapshot().name(), Some("s"));
}
