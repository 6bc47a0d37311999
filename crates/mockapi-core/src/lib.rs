//! Shared service plumbing: logging setup and HTTP middleware.

pub mod middleware;
pub mod tracing;
