//! Test utilities for the mock API crates.
//!
//! Provides `FixtureTree`, an on-disk fixtures root in a temporary directory.
//! Import in tests only, never in production code.

pub mod fixture;
