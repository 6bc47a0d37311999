//! Filesystem fixture loader.
//!
//! Layout: `<root>/<fixture>/<any/nested/dirs>/response.json`. Every directory
//! that directly contains `response.json` is one route, keyed by its path
//! relative to the fixture directory.

use std::io;
use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::fs::{self, DirEntry};
use tracing::{debug, info, warn};

use mockapi_domain::catalog::FixtureCatalog;
use mockapi_domain::fixture::{ApiFixture, RouteFixture};
use mockapi_domain::path::normalize;

use crate::domain::source::FixtureSource;
use crate::error::LoadError;

/// File name that marks a directory as a route.
pub const RESPONSE_FILE: &str = "response.json";

/// Loads the catalog from a fixtures root directory.
#[derive(Debug, Clone)]
pub struct FsFixtureSource {
    pub root: PathBuf,
}

impl FsFixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FixtureSource for FsFixtureSource {
    async fn load_all(&self) -> Result<FixtureCatalog, LoadError> {
        load_all(&self.root).await
    }
}

/// Scan `root` and build the full catalog. One fixture per top-level directory.
pub async fn load_all(root: &Path) -> Result<FixtureCatalog, LoadError> {
    let mut catalog = FixtureCatalog::new();
    for entry in read_dir_sorted(root).await? {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        // A fixture may be a symlink to a directory; nested entries are not followed.
        let metadata = fs::metadata(&path).await.map_err(io_error(&path))?;
        if !metadata.is_dir() {
            warn!(path = %path.display(), "skipping non-directory entry in fixtures root");
            continue;
        }

        let fixture = load_fixture(path, "/".to_owned()).await?;
        info!(fixture = %name, routes = fixture.len(), "loaded fixture");
        catalog.insert(name, fixture);
    }
    Ok(catalog)
}

/// Walk one directory. Returns the routes found at or below `dir`; the caller
/// merges them into its own map.
fn load_fixture(dir: PathBuf, api_path: String) -> BoxFuture<'static, Result<ApiFixture, LoadError>> {
    async move {
        let mut fixture = ApiFixture::new();
        for entry in read_dir_sorted(&dir).await? {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            // Symlinks are not followed.
            let file_type = entry.file_type().await.map_err(io_error(&path))?;

            if file_type.is_dir() {
                let nested = load_fixture(path, join_api_path(&api_path, &name)).await?;
                for route in fixture.merge(nested) {
                    warn!(route = %route, dir = %dir.display(), "duplicate route path, keeping the last one");
                }
            } else if name == RESPONSE_FILE {
                let route = read_route(&path).await?;
                debug!(route = %normalize(&api_path), file = %path.display(), "registered route");
                if fixture.insert(&api_path, route).is_some() {
                    warn!(route = %normalize(&api_path), "duplicate route path, keeping the last one");
                }
            }
        }
        Ok(fixture)
    }
    .boxed()
}

async fn read_route(path: &Path) -> Result<RouteFixture, LoadError> {
    let contents = fs::read(path).await.map_err(io_error(path))?;
    let json_response = serde_json::from_slice(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RouteFixture::new(json_response))
}

/// Directory entries sorted by name, so collisions resolve the same way on
/// every platform.
async fn read_dir_sorted(dir: &Path) -> Result<Vec<DirEntry>, LoadError> {
    let mut reader = fs::read_dir(dir).await.map_err(io_error(dir))?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(io_error(dir))? {
        entries.push(entry);
    }
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

fn join_api_path(api_path: &str, segment: &str) -> String {
    format!("{}/{}", api_path.trim_end_matches('/'), segment)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> LoadError + use<> {
    let path = path.to_path_buf();
    move |source| LoadError::Io { path, source }
}
