use crate::error::SoilError;
use crate::rules::schema::ThresholdTable;

const SOIL_THRESHOLDS_JSON: &str = include_str!("../../../../rules/soil-thresholds.json");

/// The built-in status bands for N, P, K, pH and moisture.
pub fn default_thresholds() -> Result<ThresholdTable, SoilError> {
    let table: ThresholdTable = serde_json::from_str(SOIL_THRESHOLDS_JSON)?;
    Ok(table)
}
