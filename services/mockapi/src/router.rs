use axum::{Router, routing::get};

use mockapi_core::middleware::trace_layer;

use crate::handlers::{load_fixture::load_fixture, serve_fixture::serve_fixture};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Fixture control; other methods on this path fall through to the fixture
        .route(
            "/load-fixture",
            get(load_fixture).fallback(serve_fixture),
        )
        // Everything else is served from the active fixture
        .fallback(serve_fixture)
        .layer(trace_layer())
        .with_state(state)
}
