//! Best-fit scan over an ordered catalog.
//!
//! Selection rules:
//! 1. Empty catalog → `Empty`.
//! 2. Scan records in ascending (outer, inner) order. For each record compute
//!    `required = length_m * capacity_per_meter` and take the **first** record
//!    with `capacity_max + ε >= required`.
//! 3. No match → `NoFit` with the catalog's first record as reference and the
//!    requirement recomputed with that record's rate.
//!
//! The requirement is **not** one global number: each candidate consumes at a
//! different rate, so a larger dimension may face a larger requirement than a
//! smaller one. The predicate is therefore not monotonic over the catalog and
//! a full linear scan is required; no binary search is possible.

use crate::domain::{DimensionRecord, SelectionResult};

/// Tolerance absorbing floating-point rounding at exact-equality boundaries.
pub const CAPACITY_EPS: f64 = 1e-9;

/// Select the smallest dimension able to carry `length_m` meters.
///
/// Never fails: empty catalogs and uncoverable lengths are ordinary result
/// variants. `records` must already be in catalog order (the loader sorts
/// defensively).
pub fn select(records: &[DimensionRecord], length_m: f64) -> SelectionResult {
    let Some(first) = records.first() else {
        return SelectionResult::Empty;
    };

    for r in records {
        let required = r.required_capacity(length_m);
        if r.capacity_max + CAPACITY_EPS >= required {
            return SelectionResult::Fit {
                record: r.clone(),
                required,
            };
        }
    }

    SelectionResult::NoFit {
        reference: first.clone(),
        required: first.required_capacity(length_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(label: &str, inner: f64, capacity_max: f64, capacity_per_meter: f64) -> DimensionRecord {
        DimensionRecord {
            label: label.to_string(),
            inner,
            capacity_max,
            capacity_per_meter,
        }
    }

    fn sample_catalog() -> Vec<DimensionRecord> {
        vec![rec("10x1", 8.0, 1.0, 0.5), rec("22x1", 20.0, 3.0, 1.0)]
    }

    #[test]
    fn empty_catalog_is_empty() {
        assert_eq!(select(&[], 2.0), SelectionResult::Empty);
    }

    #[test]
    fn fit_at_exact_boundary() {
        // 2.0m * 0.5/m = 1.0 required, which the first row meets exactly.
        let got = select(&sample_catalog(), 2.0);
        match got {
            SelectionResult::Fit { record, required } => {
                assert_eq!(record.label, "10x1");
                assert!((required - 1.0).abs() < CAPACITY_EPS);
            }
            other => panic!("expected Fit, got {other:?}"),
        }
    }

    #[test]
    fn no_fit_reports_first_record_and_its_requirement() {
        // 10.0m: "10x1" requires 5.0 (max 1.0), "22x1" requires 10.0 (max 3.0).
        let got = select(&sample_catalog(), 10.0);
        match got {
            SelectionResult::NoFit {
                reference,
                required,
            } => {
                assert_eq!(reference.label, "10x1");
                assert!((required - 5.0).abs() < CAPACITY_EPS);
            }
            other => panic!("expected NoFit, got {other:?}"),
        }
    }

    #[test]
    fn first_satisfying_record_wins_over_later_ones() {
        // Both rows satisfy their own requirement; the earlier one is chosen.
        let catalog = vec![rec("12x1", 10.0, 2.0, 0.5), rec("22x1", 20.0, 10.0, 1.0)];
        match select(&catalog, 3.0) {
            SelectionResult::Fit { record, .. } => assert_eq!(record.label, "12x1"),
            other => panic!("expected Fit, got {other:?}"),
        }
    }

    #[test]
    fn requirement_is_per_record_not_global() {
        // The small row fails its own requirement while the large row passes
        // a *different* (larger) requirement, so the scan must not assume a
        // shared target value.
        let catalog = vec![rec("10x1", 8.0, 1.0, 0.5), rec("22x1", 20.0, 10.0, 2.0)];
        match select(&catalog, 4.0) {
            SelectionResult::Fit { record, required } => {
                assert_eq!(record.label, "22x1");
                assert!((required - 8.0).abs() < CAPACITY_EPS);
            }
            other => panic!("expected Fit, got {other:?}"),
        }
    }

    #[test]
    fn epsilon_absorbs_rounding_at_the_boundary() {
        // 0.1 * 3 != 0.3 exactly in binary; the tolerance must still accept it.
        let catalog = vec![rec("10x1", 8.0, 0.3, 0.1)];
        match select(&catalog, 3.0) {
            SelectionResult::Fit { record, .. } => assert_eq!(record.label, "10x1"),
            other => panic!("expected Fit, got {other:?}"),
        }
    }

    #[test]
    fn exactly_one_variant_is_returned() {
        // Terminates with exactly one of Fit/NoFit/Empty across a spread of
        // lengths (the match in each helper already proves exclusivity).
        let catalog = sample_catalog();
        for length in [0.1, 1.0, 2.0, 5.0, 10.0, 100.0] {
            match select(&catalog, length) {
                SelectionResult::Fit { .. }
                | SelectionResult::NoFit { .. }
                | SelectionResult::Empty => {}
            }
        }
    }
}
