use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mockapi_domain::catalog::FixtureCatalog;

/// Usage hint returned when `/load-fixture` is called without a name.
pub const LOAD_FIXTURE_USAGE: &str = r#"Expected query parameter "name=<fixture-name>""#;

/// Fatal errors raised while loading the fixtures root at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Fixture activation errors. Reported to the caller; the active fixture is
/// left untouched.
#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    #[error(r#"Expected query parameter "name=<fixture-name>""#)]
    MissingFixtureName,
    #[error("Failed to load fixture '{name}', a fixture with this name doesn't exist.")]
    UnknownFixture {
        name: String,
        catalog: Arc<FixtureCatalog>,
    },
}

impl MockApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFixtureName => "MISSING_FIXTURE_NAME",
            Self::UnknownFixture { .. } => "UNKNOWN_FIXTURE",
        }
    }
}

impl IntoResponse for MockApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFixtureName => (StatusCode::BAD_REQUEST, LOAD_FIXTURE_USAGE).into_response(),
            Self::UnknownFixture { ref catalog, .. } => {
                let body = serde_json::json!({
                    "message": format!("{self} See below for valid fixtures."),
                    "fixtures": &**catalog,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}
