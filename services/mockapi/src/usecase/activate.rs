use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use mockapi_domain::active::ActiveFixture;
use mockapi_domain::catalog::FixtureCatalog;

use crate::error::MockApiError;

// ── ActivateFixture ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateFixtureOutput {
    pub name: String,
    pub message: String,
}

/// Switch the active fixture by name.
///
/// Used both by `GET /load-fixture` and by the `--fixture` startup flag.
pub struct ActivateFixtureUseCase {
    pub catalog: Arc<FixtureCatalog>,
    pub active: Arc<RwLock<ActiveFixture>>,
}

impl ActivateFixtureUseCase {
    /// Activate `name`. Empty or missing names and names not in the catalog
    /// are rejected without touching the current selection. Re-activating
    /// the active fixture succeeds identically.
    pub fn execute(&self, name: Option<&str>) -> Result<ActivateFixtureOutput, MockApiError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(MockApiError::MissingFixtureName)?;

        let Some(fixture) = self.catalog.get(name) else {
            let err = MockApiError::UnknownFixture {
                name: name.to_owned(),
                catalog: Arc::clone(&self.catalog),
            };
            error!(fixture = %name, kind = err.kind(), "{err}");
            return Err(err);
        };

        *self.active.write() = ActiveFixture::Active {
            name: name.to_owned(),
            fixture: Arc::clone(fixture),
        };
        info!(fixture = %name, routes = fixture.len(), "activated fixture");

        Ok(ActivateFixtureOutput {
            name: name.to_owned(),
            message: format!("Loaded fixture {name}"),
        })
    }
}
