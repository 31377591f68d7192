//! Length input parsing and unit conversion.
//!
//! The core works in meters internally; user input arrives as free-form text
//! plus a unit selector.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::num::parse_decimal;

/// Supported length units for user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    #[value(name = "m")]
    Meter,
    #[serde(rename = "cm")]
    #[value(name = "cm")]
    Centimeter,
}

impl LengthUnit {
    /// Short label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
        }
    }
}

// clap's `default_value_t` renders the default through Display.
impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a length text (comma or point decimal separator) into meters.
///
/// Returns `None` on unparseable input. A zero or negative value still parses;
/// the request pipeline enforces `length > 0` separately so the two failure
/// modes get distinct messages.
pub fn parse_length(text: &str, unit: LengthUnit) -> Option<f64> {
    let value = parse_decimal(text)?;
    Some(match unit {
        LengthUnit::Meter => value,
        LengthUnit::Centimeter => value / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_pass_through() {
        assert_eq!(parse_length("1.5", LengthUnit::Meter), Some(1.5));
    }

    #[test]
    fn centimeters_divide_by_100() {
        let v = parse_length("80,034", LengthUnit::Centimeter).unwrap();
        assert!((v - 0.80034).abs() < 1e-12);
    }

    #[test]
    fn invalid_text_is_none() {
        assert_eq!(parse_length("abc", LengthUnit::Meter), None);
    }

    #[test]
    fn negative_parses_but_is_not_domain_checked_here() {
        assert_eq!(parse_length("-1", LengthUnit::Meter), Some(-1.0));
    }
}
