use axum::{
    Json,
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;
use crate::usecase::route::RouteResult;

/// Body returned instead of a match, listing what *could* have matched.
#[derive(Serialize)]
pub struct DiagnosticResponse<'a, T: Serialize> {
    pub message: String,
    pub fixtures: &'a T,
}

// ── Fallback: every path other than /load-fixture ───────────────────────────

/// Serve the active fixture's response for the request path. Misses are
/// answered with a diagnostic body, not an error status.
pub async fn serve_fixture(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match state.route_usecase().execute(uri.path()) {
        RouteResult::Matched(body) => Json(body).into_response(),
        RouteResult::NoFixtureLoaded => {
            warn!(
                "No fixture is loaded, use the \"{}\" route to load a particular fixture.",
                state.load_fixture_template()
            );
            Json(DiagnosticResponse {
                message: format!(
                    "No fixture is loaded, so failed to match incoming route '{uri}'. See valid fixtures below."
                ),
                fixtures: &*state.catalog,
            })
            .into_response()
        }
        RouteResult::NotFound {
            fixture_name,
            fixture,
        } => Json(DiagnosticResponse {
            message: format!(
                "Failed to match incoming route '{uri}' against any route in fixture {fixture_name}. See valid routes below."
            ),
            fixtures: &*fixture,
        })
        .into_response(),
    }
}
