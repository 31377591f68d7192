//! Dimension selection.
//!
//! Responsibilities:
//!
//! - scan the ordered catalog for the first dimension that covers its own
//!   per-record capacity requirement
//! - report the no-fit fallback (smallest dimension as reference)

pub mod engine;

pub use engine::*;
