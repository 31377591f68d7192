//! CSV catalog ingest and normalization.
//!
//! This module turns one named catalog (a delimited table of dimension rows)
//! into a clean, ordered `Vec<DimensionRecord>`.
//!
//! Design goals:
//! - **Tolerant headers**: logical columns resolve through a declarative alias
//!   table (case-, whitespace-, underscore- and umlaut-insensitive), with a
//!   substring fallback for decorated headers like `außen (mm)`
//! - **Row-level recovery**: a malformed row is skipped and reported, never
//!   fatal to the load
//! - **Hard failure only for schema problems**: an unresolvable logical column
//!   aborts the load with the headers actually present
//! - **Deterministic order**: records are defensively sorted ascending by the
//!   label's numeric prefix, ties by inner dimension

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::DimensionRecord;
use crate::error::AppError;
use crate::num::parse_decimal;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based source line number (header is line 1).
    pub line: usize,
    /// Raw row content, for the diagnostic.
    pub raw: String,
    pub message: String,
}

/// Ingest output: ordered records + row diagnostics.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog_id: String,
    pub records: Vec<DimensionRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl CatalogLoad {
    fn empty(catalog_id: &str) -> Self {
        Self {
            catalog_id: catalog_id.to_string(),
            records: Vec::new(),
            row_errors: Vec::new(),
            rows_read: 0,
        }
    }
}

/// One logical catalog column and the header spellings that resolve to it.
///
/// Aliases are stored pre-normalized (see [`normalize_name`]) so resolution is
/// a plain equality check; the alias lists are independently testable data,
/// not string probing scattered through the loader.
struct FieldSpec {
    /// Name used in error messages.
    logical: &'static str,
    aliases: &'static [&'static str],
}

const FIELD_OUTER: FieldSpec = FieldSpec {
    logical: "outer",
    aliases: &["aussen", "outer", "label"],
};
const FIELD_INNER: FieldSpec = FieldSpec {
    logical: "inner",
    aliases: &["innen", "inner"],
};
const FIELD_CAPACITY_MAX: FieldSpec = FieldSpec {
    logical: "capacity_max",
    aliases: &["cettamax", "capacitymax", "maxcapacity"],
};
const FIELD_CAPACITY_PER_METER: FieldSpec = FieldSpec {
    logical: "capacity_per_meter",
    aliases: &["cettaprometer", "capacitypermeter", "cettapermeter"],
};

/// Fixed column indexes, resolved once per load.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    outer: usize,
    inner: usize,
    capacity_max: usize,
    capacity_per_meter: usize,
}

/// Load one catalog by identifier from the catalog directory.
///
/// A missing backing file yields an **empty** load, not an error: callers
/// cannot distinguish "no catalog" from "catalog with no usable rows" except
/// through the `Empty` selection result, which is the intended behavior.
pub fn load_catalog(db_dir: &Path, catalog_id: &str) -> Result<CatalogLoad, AppError> {
    let path = db_dir.join(format!("{catalog_id}.csv"));
    if !path.is_file() {
        return Ok(CatalogLoad::empty(catalog_id));
    }

    let file = File::open(&path).map_err(|e| {
        AppError::config(format!("Failed to open catalog '{}': {e}", path.display()))
    })?;
    load_from_reader(catalog_id, file)
}

/// Load a catalog from any reader (used directly by tests).
pub fn load_from_reader(catalog_id: &str, reader: impl Read) -> Result<CatalogLoad, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::config(format!("Failed to read catalog headers: {e}")))?
        .clone();

    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in csv_reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - diagnostics report 1-based source line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    raw: String::new(),
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, columns) {
            Ok(rec) => records.push(rec),
            Err(message) => row_errors.push(RowError {
                line,
                raw: raw_row(&record),
                message,
            }),
        }
    }

    // Defensive sort: the engine's first-match policy relies on ascending
    // (outer, inner) order, and source files cannot be trusted to provide it.
    // The sort is stable, so labels without a numeric prefix keep their
    // relative source order at the end.
    records.sort_by(|a, b| {
        match (outer_sort_value(&a.label), outer_sort_value(&b.label)) {
            (Some(ka), Some(kb)) => ka
                .partial_cmp(&kb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.inner
                        .partial_cmp(&b.inner)
                        .unwrap_or(std::cmp::Ordering::Equal)
                }),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            // No ordering key on either side: the inner tie-break does not
            // apply, so the stable sort keeps source order.
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    Ok(CatalogLoad {
        catalog_id: catalog_id.to_string(),
        records,
        row_errors,
        rows_read,
    })
}

/// Enumerate catalog identifiers: `*.csv` file stems, sorted.
///
/// A missing directory yields an empty list; the caller decides whether that
/// deserves a message.
pub fn list_catalogs(db_dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(db_dir) else {
        return Vec::new();
    };

    let mut out: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                == Some(true);
            if !is_csv {
                return None;
            }
            path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
        })
        .collect();

    out.sort();
    out
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap, AppError> {
    let normalized: Vec<String> = headers.iter().map(normalize_name).collect();

    Ok(ColumnMap {
        outer: resolve_field(&FIELD_OUTER, &normalized, headers)?,
        inner: resolve_field(&FIELD_INNER, &normalized, headers)?,
        capacity_max: resolve_field(&FIELD_CAPACITY_MAX, &normalized, headers)?,
        capacity_per_meter: resolve_field(&FIELD_CAPACITY_PER_METER, &normalized, headers)?,
    })
}

fn resolve_field(
    field: &FieldSpec,
    normalized: &[String],
    headers: &StringRecord,
) -> Result<usize, AppError> {
    // Exact alias match first.
    for alias in field.aliases {
        if let Some(idx) = normalized.iter().position(|h| h == alias) {
            return Ok(idx);
        }
    }

    // Fallback: substring match against the normalized header, which covers
    // decorated headers like `außen (mm)` or `cetta_max [kg]`.
    for alias in field.aliases {
        if let Some(idx) = normalized.iter().position(|h| h.contains(alias)) {
            return Ok(idx);
        }
    }

    let present: Vec<&str> = headers.iter().collect();
    Err(AppError::config(format!(
        "Could not resolve catalog column `{}`. Headers present: {present:?}",
        field.logical
    )))
}

/// Normalize a header or alias for matching.
///
/// Lowercase; whitespace, underscores and a UTF-8 BOM are dropped; German
/// letters fold to their ASCII transliterations so `außen` and `aussen`
/// resolve identically.
fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().trim_start_matches('\u{feff}').to_lowercase().chars() {
        match c {
            c if c.is_whitespace() || c == '_' => {}
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            c => out.push(c),
        }
    }
    out
}

fn parse_row(record: &StringRecord, columns: ColumnMap) -> Result<DimensionRecord, String> {
    let label = get_cell(record, columns.outer, "outer")?.to_string();
    let inner = parse_numeric(record, columns.inner, "inner")?;
    let capacity_max = parse_numeric(record, columns.capacity_max, "capacity_max")?;
    let capacity_per_meter =
        parse_numeric(record, columns.capacity_per_meter, "capacity_per_meter")?;

    Ok(DimensionRecord {
        label,
        inner,
        capacity_max,
        capacity_per_meter,
    })
}

fn get_cell<'a>(record: &'a StringRecord, idx: usize, logical: &str) -> Result<&'a str, String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{logical}` value."))
}

fn parse_numeric(record: &StringRecord, idx: usize, logical: &str) -> Result<f64, String> {
    let raw = get_cell(record, idx, logical)?;
    parse_decimal(raw).ok_or_else(|| format!("Invalid `{logical}` value '{raw}'."))
}

/// Numeric interpretation of a label's leading prefix, for ordering.
///
/// `"22x1"` → `22.0`, `"6,5x1"` → `6.5`. Labels with no numeric prefix have
/// no ordering key and sort after all keyed labels.
fn outer_sort_value(label: &str) -> Option<f64> {
    let trimmed = label.trim();
    let prefix_len = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    if prefix_len == 0 {
        return None;
    }
    parse_decimal(&trimmed[..prefix_len])
}

fn raw_row(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
