//! Domain types shared across the mock API crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Filesystem access lives in the service's `infra/` layer.

pub mod active;
pub mod catalog;
pub mod fixture;
pub mod path;
