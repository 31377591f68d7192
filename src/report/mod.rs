//! Reporting utilities: formatted terminal output and JSON export.

pub mod format;

pub use format::*;
