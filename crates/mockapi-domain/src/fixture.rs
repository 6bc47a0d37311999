//! Route and API fixture types.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::path::normalize;

/// One stored response, parsed once at load time and kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteFixture {
    #[serde(rename = "jsonResponse")]
    pub json_response: Value,
}

impl RouteFixture {
    pub fn new(json_response: Value) -> Self {
        Self { json_response }
    }
}

/// A complete mock API surface: normalized route path → stored response.
///
/// Keys are always normalized on the way in and on lookup, so `/users`,
/// `/users/` and `\users` address the same route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApiFixture {
    routes: BTreeMap<String, RouteFixture>,
}

impl ApiFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `route` under the normalized form of `path`.
    ///
    /// Returns the previously registered route when the normalized path was
    /// already taken.
    pub fn insert(&mut self, path: &str, route: RouteFixture) -> Option<RouteFixture> {
        self.routes.insert(normalize(path), route)
    }

    pub fn get(&self, path: &str) -> Option<&RouteFixture> {
        self.routes.get(&normalize(path))
    }

    /// Move every route of `other` into `self`. Later entries win; the
    /// normalized paths that were overwritten are returned.
    pub fn merge(&mut self, other: ApiFixture) -> Vec<String> {
        let mut collisions = Vec::new();
        for (path, route) in other.routes {
            if self.routes.insert(path.clone(), route).is_some() {
                collisions.push(path);
            }
        }
        collisions
    }

    /// Routes in sorted path order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &RouteFixture)> {
        self.routes.iter().map(|(path, route)| (path.as_str(), route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
