//! On-disk fixture tree builder.
//!
//! Lays out `<root>/<fixture>/<route dirs>/response.json` the way the loader
//! expects to find it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A fixtures root living in a temporary directory, removed on drop.
///
/// # Example
/// ```no_run
/// use mockapi_testing::fixture::FixtureTree;
/// use serde_json::json;
///
/// let tree = FixtureTree::new()
///     .route("scenario-a", "users", json!({"id": 1}))
///     .route("scenario-a", "users/profile", json!({"bio": "x"}));
/// let root = tree.root();
/// ```
pub struct FixtureTree {
    dir: TempDir,
}

impl Default for FixtureTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureTree {
    /// Create an empty fixtures root.
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp fixtures root");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `fixture/route` under the root. `route` uses `/` separators;
    /// an empty route is the fixture directory itself.
    pub fn route_dir(&self, fixture: &str, route: &str) -> PathBuf {
        route
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root().join(fixture), |dir, segment| dir.join(segment))
    }

    /// Create an empty fixture directory.
    pub fn fixture(self, name: &str) -> Self {
        fs::create_dir_all(self.root().join(name)).expect("failed to create fixture dir");
        self
    }

    /// Write `response` as `response.json` for `route` inside `fixture`.
    pub fn route(self, fixture: &str, route: &str, response: Value) -> Self {
        let body = serde_json::to_string_pretty(&response).expect("serializable response");
        self.raw_response(fixture, route, &body)
    }

    /// Write `contents` verbatim as `response.json`; used for malformed input.
    pub fn raw_response(self, fixture: &str, route: &str, contents: &str) -> Self {
        self.file(fixture, route, "response.json", contents)
    }

    /// Write any file into a route directory.
    pub fn file(self, fixture: &str, route: &str, file_name: &str, contents: &str) -> Self {
        let dir = self.route_dir(fixture, route);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", dir.display()));
        let path = dir.join(file_name);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        self
    }

    /// Write a file directly under the root (not inside any fixture).
    pub fn root_file(self, file_name: &str, contents: &str) -> Self {
        let path = self.root().join(file_name);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        self
    }
}
