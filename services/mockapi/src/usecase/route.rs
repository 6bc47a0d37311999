use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use mockapi_domain::active::ActiveFixture;
use mockapi_domain::fixture::ApiFixture;
use mockapi_domain::path::normalize;

use crate::presentation::render_fixture;

/// Outcome of resolving a request path against the active fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    /// The stored response for the path.
    Matched(Value),
    /// No fixture has been activated yet.
    NoFixtureLoaded,
    /// A fixture is active but has no route for the path.
    NotFound {
        fixture_name: String,
        fixture: Arc<ApiFixture>,
    },
}

// ── RouteRequest ─────────────────────────────────────────────────────────────

/// Exact match of the normalized path, nothing else: no prefixes, methods or
/// query strings.
pub struct RouteRequestUseCase {
    pub active: ActiveFixture,
}

impl RouteRequestUseCase {
    pub fn execute(&self, request_path: &str) -> RouteResult {
        let ActiveFixture::Active { name, fixture } = &self.active else {
            return RouteResult::NoFixtureLoaded;
        };

        let path = normalize(request_path);
        match fixture.get(&path) {
            Some(route) => {
                info!(route = %path, fixture = %name, "matched route");
                RouteResult::Matched(route.json_response.clone())
            }
            None => {
                warn!(route = %path, fixture = %name, "no route in active fixture");
                debug!("route table for fixture {name}:\n{}", render_fixture(fixture));
                RouteResult::NotFound {
                    fixture_name: name.clone(),
                    fixture: Arc::clone(fixture),
                }
            }
        }
    }
}
