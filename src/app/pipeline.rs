//! Shared "selection pipeline" logic used by both CLI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate request -> parse length -> load catalog -> select
//!
//! The one-shot and interactive front-ends can then focus on presentation
//! (flags vs prompts).
//!
//! The catalog is loaded fresh on every request; there is no cache, so a
//! catalog file edited between requests is always picked up.

use std::path::Path;

use crate::domain::{SelectRequest, SelectionResult};
use crate::error::AppError;
use crate::io::catalog::{CatalogLoad, load_catalog};
use crate::length::parse_length;
use crate::select::select;

/// All computed outputs of a single selection request.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub load: CatalogLoad,
    /// Canonical length in meters.
    pub length_m: f64,
    pub result: SelectionResult,
}

/// Execute the full selection pipeline and return the computed outputs.
///
/// Input validation happens before any catalog I/O: an invalid or
/// non-positive length rejects the request without partial computation.
pub fn run_select(db_dir: &Path, request: &SelectRequest) -> Result<RunOutput, AppError> {
    let catalog_id = request.catalog_id.trim();
    if catalog_id.is_empty() {
        return Err(AppError::input("No catalog selected."));
    }

    let length_m = parse_length(&request.length_text, request.unit).ok_or_else(|| {
        AppError::input(format!(
            "Invalid length '{}'. Enter a number such as 80,034.",
            request.length_text
        ))
    })?;
    if length_m <= 0.0 {
        return Err(AppError::input("Length must be greater than zero."));
    }

    let load = load_catalog(db_dir, catalog_id)?;
    let result = select(&load.records, length_m);

    Ok(RunOutput {
        load,
        length_m,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::LengthUnit;
    use std::fs;
    use std::path::PathBuf;

    /// Per-test scratch directory under the system temp dir.
    struct TempDb {
        dir: PathBuf,
    }

    impl TempDb {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "pipe-select-test-{}-{name}",
                std::process::id()
            ));
            fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn write_catalog(&self, id: &str, content: &str) {
            fs::write(self.dir.join(format!("{id}.csv")), content).unwrap();
        }
    }

    impl Drop for TempDb {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    fn request(catalog: &str, length: &str, unit: LengthUnit) -> SelectRequest {
        SelectRequest {
            catalog_id: catalog.to_string(),
            length_text: length.to_string(),
            unit,
        }
    }

    #[test]
    fn end_to_end_fit() {
        let db = TempDb::new("fit");
        db.write_catalog(
            "heating",
            "außen,innen,cetta_max,cetta_pro_meter\n\
             10x1,8,1.0,0.5\n\
             22x1,20,3.0,1.0\n",
        );

        let out = run_select(&db.dir, &request("heating", "2,0", LengthUnit::Meter)).unwrap();
        assert_eq!(out.length_m, 2.0);
        match out.result {
            SelectionResult::Fit { record, required } => {
                assert_eq!(record.label, "10x1");
                assert!((required - 1.0).abs() < 1e-9);
            }
            other => panic!("expected Fit, got {other:?}"),
        }
    }

    #[test]
    fn centimeter_input_converts_before_selection() {
        let db = TempDb::new("cm");
        db.write_catalog(
            "heating",
            "außen,innen,cetta_max,cetta_pro_meter\n10x1,8,1.0,0.5\n",
        );

        let out = run_select(&db.dir, &request("heating", "200", LengthUnit::Centimeter)).unwrap();
        assert_eq!(out.length_m, 2.0);
    }

    #[test]
    fn unknown_catalog_yields_empty_result_not_error() {
        let db = TempDb::new("unknown");
        let out = run_select(&db.dir, &request("nope", "1", LengthUnit::Meter)).unwrap();
        assert_eq!(out.result, SelectionResult::Empty);
    }

    #[test]
    fn all_rows_malformed_yields_empty_with_diagnostics() {
        let db = TempDb::new("malformed");
        db.write_catalog(
            "broken",
            "außen,innen,cetta_max,cetta_pro_meter\n\
             10x1,8,oops,0.5\n\
             22x1,nope,3.0,1.0\n",
        );

        let out = run_select(&db.dir, &request("broken", "1", LengthUnit::Meter)).unwrap();
        assert_eq!(out.result, SelectionResult::Empty);
        assert_eq!(out.load.row_errors.len(), 2);
    }

    #[test]
    fn invalid_length_rejects_before_selection() {
        let db = TempDb::new("badlen");
        let err = run_select(&db.dir, &request("heating", "abc", LengthUnit::Meter)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn non_positive_length_rejects_before_selection() {
        let db = TempDb::new("zerolen");
        for text in ["0", "-1"] {
            let err = run_select(&db.dir, &request("heating", text, LengthUnit::Meter)).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn empty_catalog_id_rejects() {
        let db = TempDb::new("noid");
        let err = run_select(&db.dir, &request("  ", "1", LengthUnit::Meter)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
