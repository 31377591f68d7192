//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the catalog entry (`DimensionRecord`)
//! - the selection outcome (`SelectionResult`)
//! - the caller-facing request (`SelectRequest`)

pub mod types;

pub use types::*;
