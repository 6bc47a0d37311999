//! Which fixture currently answers requests.

use std::sync::Arc;

use crate::fixture::ApiFixture;

/// The active-fixture selection.
///
/// Name and fixture travel together, so they can never disagree.
#[derive(Debug, Clone, Default)]
pub enum ActiveFixture {
    #[default]
    Unloaded,
    Active {
        name: String,
        fixture: Arc<ApiFixture>,
    },
}

impl ActiveFixture {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unloaded => None,
            Self::Active { name, .. } => Some(name),
        }
    }

    pub fn fixture(&self) -> Option<&Arc<ApiFixture>> {
        match self {
            Self::Unloaded => None,
            Self::Active { fixture, .. } => Some(fixture),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
