//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - used in-memory during selection
//! - rendered as text or exported as JSON
//! - reused by future front-ends without pulling in I/O code

use serde::{Deserialize, Serialize};

use crate::length::LengthUnit;

/// One catalog entry describing a pipe dimension with its capacity rating.
///
/// `label` is the catalog's own name for the outer dimension (e.g. `"22x1"`).
/// It is opaque text; only its leading numeric prefix participates in catalog
/// ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRecord {
    pub label: String,
    /// Inner dimension. Used only as the ordering tie-break.
    pub inner: f64,
    /// Maximum capacity this dimension can carry.
    pub capacity_max: f64,
    /// Capacity consumed per meter of material routed through this dimension.
    pub capacity_per_meter: f64,
}

impl DimensionRecord {
    /// Required capacity for `length_m` meters through this dimension.
    ///
    /// The requirement is per-record: a larger dimension typically consumes
    /// more per meter, so there is no single global target value.
    pub fn required_capacity(&self, length_m: f64) -> f64 {
        length_m * self.capacity_per_meter
    }
}

/// Outcome of a selection scan.
///
/// `NoFit` and `Empty` are ordinary results, not errors; the report layer
/// renders each distinctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionResult {
    /// The first record (in catalog order) whose `capacity_max` covers its
    /// own required capacity.
    Fit {
        record: DimensionRecord,
        required: f64,
    },
    /// No record qualifies. `reference` is the catalog's smallest record and
    /// `required` is recomputed with that record's rate, for diagnostics.
    NoFit {
        reference: DimensionRecord,
        required: f64,
    },
    /// The catalog has no usable records.
    Empty,
}

/// A caller-supplied selection request.
///
/// `length_text` stays raw text until the pipeline runs, so locale-tolerant
/// parsing happens in exactly one place.
#[derive(Debug, Clone)]
pub struct SelectRequest {
    pub catalog_id: String,
    pub length_text: String,
    pub unit: LengthUnit,
}
