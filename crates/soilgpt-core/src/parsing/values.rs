use crate::error::SoilError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric CSV cell into a Decimal.
///
/// Handles formats like:
/// - "68" -> 68
/// - "0.5" -> 0.5
/// - "  8.2 " -> 8.2
/// - "1.5e1" -> 15
///
/// Empty cells and anything that is not a number are rejected; the field name
/// is carried into the error so the user knows which column to fix.
pub fn parse_value(field: &str, s: &str) -> Result<Decimal, SoilError> {
    let s = s.trim();
    let invalid = || SoilError::InvalidDataFormat {
        field: field.to_string(),
        value: s.to_string(),
    };

    // Decimal::from_str would read "1_000" as 1000.
    if s.is_empty() || s.contains('_') {
        return Err(invalid());
    }

    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| invalid())
}
