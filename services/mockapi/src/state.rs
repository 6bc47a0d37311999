use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use mockapi_domain::active::ActiveFixture;
use mockapi_domain::catalog::FixtureCatalog;

use crate::usecase::activate::ActivateFixtureUseCase;
use crate::usecase::route::RouteRequestUseCase;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FixtureCatalog>,
    pub active: Arc<RwLock<ActiveFixture>>,
    /// Port the server is bound to; used for access hints.
    pub port: u16,
}

impl AppState {
    /// State with a fully loaded catalog and no active fixture.
    pub fn new(catalog: FixtureCatalog, port: u16) -> Self {
        Self {
            catalog: Arc::new(catalog),
            active: Arc::new(RwLock::new(ActiveFixture::Unloaded)),
            port,
        }
    }

    /// Cheap copy of the current selection (clones an `Arc`, not the fixture).
    pub fn active_snapshot(&self) -> ActiveFixture {
        self.active.read().clone()
    }

    pub fn activate_usecase(&self) -> ActivateFixtureUseCase {
        ActivateFixtureUseCase {
            catalog: Arc::clone(&self.catalog),
            active: Arc::clone(&self.active),
        }
    }

    /// Router over the selection as it is right now.
    pub fn route_usecase(&self) -> RouteRequestUseCase {
        RouteRequestUseCase {
            active: self.active_snapshot(),
        }
    }

    /// URL that activates `name` on this server.
    pub fn load_fixture_url(&self, name: &str) -> String {
        load_fixture_url(self.port, name)
    }

    /// Activation URL with a `<fixture-name>` placeholder, for usage hints.
    pub fn load_fixture_template(&self) -> String {
        format!("http://localhost:{}/load-fixture?name=<fixture-name>", self.port)
    }
}

#[derive(Serialize)]
struct LoadFixtureParams<'a> {
    name: &'a str,
}

/// URL that activates `name` on the server at `port`, with `name` query-encoded.
pub fn load_fixture_url(port: u16, name: &str) -> String {
    let query = serde_qs::to_string(&LoadFixtureParams { name })
        .unwrap_or_else(|_| format!("name={name}"));
    format!("http://localhost:{port}/load-fixture?{query}")
}
