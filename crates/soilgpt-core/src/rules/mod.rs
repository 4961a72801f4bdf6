pub mod builtin;
pub mod schema;

use crate::error::SoilError;
use schema::ThresholdTable;
use std::collections::HashSet;
use std::path::Path;

/// Load a threshold table from a JSON file.
pub fn load_thresholds(path: &Path) -> Result<ThresholdTable, SoilError> {
    let content = std::fs::read_to_string(path).map_err(|e| SoilError::ThresholdsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_thresholds(&content, path)
}

/// Parse a threshold table from a JSON string.
pub fn parse_thresholds(json: &str, source: &Path) -> Result<ThresholdTable, SoilError> {
    let table: ThresholdTable =
        serde_json::from_str(json).map_err(|e| SoilError::ThresholdsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_thresholds(&table)?;
    Ok(table)
}

/// Parse a threshold table from a JSON string (no file path context).
pub fn parse_thresholds_str(json: &str) -> Result<ThresholdTable, SoilError> {
    let table: ThresholdTable = serde_json::from_str(json).map_err(SoilError::Json)?;
    validate_thresholds(&table)?;
    Ok(table)
}

/// Validate that a threshold table is well-formed.
pub fn validate_thresholds(table: &ThresholdTable) -> Result<(), SoilError> {
    if table.parameters.is_empty() {
        return Err(SoilError::ThresholdsInvalid(
            "parameters must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for bands in &table.parameters {
        if !seen.insert(bands.parameter) {
            return Err(SoilError::ThresholdsInvalid(format!(
                "parameter '{}' is defined more than once",
                bands.parameter
            )));
        }

        if bands.error_below > bands.warning_below {
            return Err(SoilError::ThresholdsInvalid(format!(
                "parameter '{}': error_below {} is above warning_below {}",
                bands.parameter, bands.error_below, bands.warning_below
            )));
        }

        if let Some(warning_above) = bands.warning_above {
            if bands.warning_below > warning_above {
                return Err(SoilError::ThresholdsInvalid(format!(
                    "parameter '{}': warning_below {} is above warning_above {}",
                    bands.parameter, bands.warning_below, warning_above
                )));
            }
            if let Some(error_above) = bands.error_above {
                if warning_above > error_above {
                    return Err(SoilError::ThresholdsInvalid(format!(
                        "parameter '{}': warning_above {} is above error_above {}",
                        bands.parameter, warning_above, error_above
                    )));
                }
            }
        } else if let Some(error_above) = bands.error_above {
            if bands.warning_below > error_above {
                return Err(SoilError::ThresholdsInvalid(format!(
                    "parameter '{}': warning_below {} is above error_above {}",
                    bands.parameter, bands.warning_below, error_above
                )));
            }
        }
    }

    Ok(())
}
