#![allow(async_fn_in_trait)]

use mockapi_domain::catalog::FixtureCatalog;

use crate::error::LoadError;

/// Where the fixture catalog comes from. Loaded once, before serving.
pub trait FixtureSource: Send + Sync {
    /// Load every fixture. Any failure aborts the whole load.
    async fn load_all(&self) -> Result<FixtureCatalog, LoadError>;
}
