//! Locale-tolerant decimal parsing.
//!
//! Catalog exports in the field come from spreadsheets in mixed locales, so
//! numeric cells show up as `"1.5"`, `"1,5"`, or `" 80,034 "`. Catalog ingest
//! and the interactive length input share the same tolerance, so the rule
//! lives in one place.

/// Parse a decimal accepting either `,` or `.` as the decimal separator.
///
/// Whitespace anywhere in the input is ignored (thousands-style spaces
/// included). Non-finite results are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let v = cleaned.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_point_and_comma() {
        assert_eq!(parse_decimal("1.5"), Some(1.5));
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal("80,034"), Some(80.034));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_decimal("  2,60 "), Some(2.60));
        assert_eq!(parse_decimal("\t3.0\n"), Some(3.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("1..5"), None);
    }

    #[test]
    fn negative_values_still_parse() {
        // Domain validity (length > 0) is the caller's job, not the parser's.
        assert_eq!(parse_decimal("-1"), Some(-1.0));
    }
}
