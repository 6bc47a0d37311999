//! The set of all fixtures loaded at startup.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::fixture::ApiFixture;

/// Fixture name → fixture. Built once by the loader, read-only afterwards.
///
/// Fixtures are held behind `Arc` so that activating one shares the exact
/// registered object instead of copying it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FixtureCatalog {
    fixtures: BTreeMap<String, Arc<ApiFixture>>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `fixture` under `name`, replacing any fixture of that name.
    pub fn insert(&mut self, name: impl Into<String>, fixture: ApiFixture) {
        self.fixtures.insert(name.into(), Arc::new(fixture));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ApiFixture>> {
        self.fixtures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fixtures.contains_key(name)
    }

    /// Fixture names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fixtures.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Arc<ApiFixture>)> {
        self.fixtures.iter().map(|(name, fixture)| (name.as_str(), fixture))
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
