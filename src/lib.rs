//! `pipe-select` library crate.
//!
//! The binary (`pipesel`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., a future GUI front-end)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod length;
pub mod num;
pub mod report;
pub mod select;
