use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::{Deserialize, Serialize};

use crate::error::MockApiError;
use crate::state::AppState;

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct LoadFixtureQuery {
    pub name: Option<String>,
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadFixtureResponse {
    pub message: String,
}

// ── GET /load-fixture?name=<fixture-name> ────────────────────────────────────

pub async fn load_fixture(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<LoadFixtureResponse>, MockApiError> {
    // An unparseable query is treated like a missing name.
    let query: LoadFixtureQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .ok()
        .flatten()
        .unwrap_or_default();

    let output = state.activate_usecase().execute(query.name.as_deref())?;
    Ok(Json(LoadFixtureResponse {
        message: output.message,
    }))
}
