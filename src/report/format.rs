//! Selection result rendering.
//!
//! We keep formatting code in one place so:
//! - the loader/engine stay clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! Required capacities are rendered with 3 decimal digits; the JSON form
//! carries the unrounded values.

use crate::domain::SelectionResult;
use crate::error::AppError;
use crate::io::catalog::CatalogLoad;
use crate::length::LengthUnit;

/// Format the full selection report (request echo + outcome + detail).
pub fn format_selection(
    load: &CatalogLoad,
    length_m: f64,
    unit: LengthUnit,
    result: &SelectionResult,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Catalog: {}\n", load.catalog_id));
    out.push_str(&format!("Length: {length_m} m (input unit: {})\n", unit.label()));
    out.push('\n');

    match result {
        SelectionResult::Fit { record, required } => {
            out.push_str(&format!("Selected: {} capacity {required:.3}\n", record.label));
            out.push_str("Chosen record (first matching row):\n");
            out.push_str(&format!(
                "  label={}, inner={}, capacity_max={}, capacity_per_meter={}\n",
                record.label, record.inner, record.capacity_max, record.capacity_per_meter
            ));
        }
        SelectionResult::NoFit {
            reference,
            required,
        } => {
            out.push_str(&format!(
                "No dimension fits: even the smallest entry falls short. \
                 Required capacity at the smallest entry: {required:.3}\n"
            ));
            out.push_str(&format!(
                "Smallest entry was: {} | capacity_max={}, capacity_per_meter={}\n",
                reference.label, reference.capacity_max, reference.capacity_per_meter
            ));
        }
        SelectionResult::Empty => {
            out.push_str(&format!(
                "No usable rows in catalog '{}'.\n",
                load.catalog_id
            ));
        }
    }

    out
}

/// Format row-level load diagnostics as warning lines (empty string if none).
pub fn format_load_warnings(load: &CatalogLoad) -> String {
    let mut out = String::new();
    for err in &load.row_errors {
        out.push_str(&format!(
            "warning: catalog '{}' line {}: {} | row: {}\n",
            load.catalog_id, err.line, err.message, err.raw
        ));
    }
    out
}

/// Serialize a selection result as tagged JSON.
pub fn to_json(result: &SelectionResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| AppError::internal(format!("Failed to serialize result: {e}")))
}
