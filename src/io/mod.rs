//! Input/output helpers.
//!
//! - CSV catalog ingest + validation (`catalog`)
//! - catalog-directory enumeration (`catalog::list_catalogs`)

pub mod catalog;

pub use catalog::*;
