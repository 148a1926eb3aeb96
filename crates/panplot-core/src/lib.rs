//! panplot Core
//!
//! Shared foundations for the panplot crates: logging setup, profiling
//! scopes, math re-exports and small generic geometry types.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
