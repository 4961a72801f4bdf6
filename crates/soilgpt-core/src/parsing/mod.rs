pub mod values;

use crate::error::SoilError;
use crate::model::{Parameter, SoilRecord};
use std::collections::BTreeMap;
use std::path::Path;
use values::parse_value;

/// Column holding the opaque sample identifier.
pub const SAMPLE_ID_COLUMN: &str = "sampleId";

/// Required columns, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 6] = [SAMPLE_ID_COLUMN, "N", "P", "K", "pH", "Moisture"];

/// Read and parse a soil CSV file.
pub fn load_csv(path: &Path) -> Result<SoilRecord, SoilError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(SoilError::InvalidInput("Please upload a CSV file".into()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_csv(&content)
}

/// Parse CSV text into a single SoilRecord.
///
/// The first data row wins; any further rows are ignored. Columns outside the
/// required set are kept on the record as raw strings.
pub fn parse_csv(text: &str) -> Result<SoilRecord, SoilError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = reader.records();

    let row = match rows.next() {
        Some(row) => row?,
        None => return Err(SoilError::EmptyInput),
    };

    let ignored = rows.count();
    if ignored > 0 {
        tracing::warn!(ignored, "CSV has more than one data row; using the first");
    }

    for field in REQUIRED_FIELDS {
        if !headers.iter().any(|h| h == field) {
            return Err(SoilError::MissingField(field.to_string()));
        }
    }

    let sample_id = cell(&headers, &row, SAMPLE_ID_COLUMN).to_string();
    let numeric = |p: Parameter| parse_value(p.column(), cell(&headers, &row, p.column()));

    let record = SoilRecord::new(
        sample_id,
        numeric(Parameter::Nitrogen)?,
        numeric(Parameter::Phosphorus)?,
        numeric(Parameter::Potassium)?,
        numeric(Parameter::Ph)?,
        numeric(Parameter::Moisture)?,
    );

    let extra: BTreeMap<String, String> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.is_empty() && !REQUIRED_FIELDS.contains(h))
        .map(|(idx, h)| (h.to_string(), row.get(idx).unwrap_or("").to_string()))
        .collect();

    for name in extra.keys() {
        tracing::warn!(column = %name, "unrecognized CSV column kept as extra data");
    }

    tracing::debug!(sample_id = record.sample_id(), "parsed soil record");

    Ok(record.with_extra(extra))
}

/// Cell under the named column; short rows yield an empty cell.
fn cell<'a>(headers: &csv::StringRecord, row: &'a csv::StringRecord, name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|idx| row.get(idx))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_single_row() {
        let csv = "sampleId,N,P,K,pH,Moisture\nS1,3,0.5,2,8.2,10\n";
        let r = parse_csv(csv).unwrap();
        assert_eq!(r.sample_id(), "S1");
        assert_eq!(r.n(), dec!(3));
        assert_eq!(r.p(), dec!(0.5));
        assert_eq!(r.k(), dec!(2));
        assert_eq!(r.ph(), dec!(8.2));
        assert_eq!(r.moisture(), dec!(10));
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "pH,Moisture,sampleId,K,P,N\n6.5,35,North,40,30,50";
        let r = parse_csv(csv).unwrap();
        assert_eq!(r.sample_id(), "North");
        assert_eq!(r.n(), dec!(50));
        assert_eq!(r.ph(), dec!(6.5));
    }

    #[test]
    fn test_first_row_wins() {
        let csv = "sampleId,N,P,K,pH,Moisture\nA,1,1,1,6,20\nB,2,2,2,7,30\n";
        let r = parse_csv(csv).unwrap();
        assert_eq!(r.sample_id(), "A");
    }

    #[test]
    fn test_headers_and_cells_are_trimmed() {
        let csv = " sampleId , N , P , K , pH , Moisture \n S1 , 3 , 0.5 , 2 , 8.2 , 10 ";
        let r = parse_csv(csv).unwrap();
        assert_eq!(r.sample_id(), "S1");
        assert_eq!(r.moisture(), dec!(10));
    }

    #[test]
    fn test_missing_field_reported_by_name() {
        let csv = "sampleId,N,P,K,Moisture\nS1,3,0.5,2,10";
        let err = parse_csv(csv).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: pH");
    }

    #[test]
    fn test_first_missing_field_wins() {
        let csv = "N,P\n1,2";
        let err = parse_csv(csv).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: sampleId");
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let csv = "sampleId,N,P,K,pH,Moisture\nS1,high,0.5,2,8.2,10";
        let err = parse_csv(csv).unwrap_err();
        assert!(err.to_string().starts_with("Invalid data format"));
    }

    #[test]
    fn test_short_row_rejected() {
        let csv = "sampleId,N,P,K,pH,Moisture\nS1,3,0.5";
        let err = parse_csv(csv).unwrap_err();
        assert!(matches!(err, SoilError::InvalidDataFormat { ref field, .. } if field == "K"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "sampleId,N,P,K,pH,Moisture\n";
        assert!(matches!(parse_csv(csv), Err(SoilError::EmptyInput)));
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(matches!(parse_csv(""), Err(SoilError::EmptyInput)));
    }

    #[test]
    fn test_extra_columns_kept() {
        let csv = "sampleId,N,P,K,pH,Moisture,Calcium\nS1,3,0.5,2,8.2,10,120";
        let r = parse_csv(csv).unwrap();
        assert_eq!(r.extra().get("Calcium").map(String::as_str), Some("120"));
    }

    #[test]
    fn test_load_rejects_non_csv_extension() {
        let err = load_csv(Path::new("soil.txt")).unwrap_err();
        assert_eq!(err.to_string(), "Please upload a CSV file");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.csv");
        std::fs::write(&path, "sampleId,N,P,K,pH,Moisture\nS9,50,30,40,6.5,35\n").unwrap();
        let r = load_csv(&path).unwrap();
        assert_eq!(r.sample_id(), "S9");
    }
}
