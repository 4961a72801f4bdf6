pub mod analyze;
pub mod chat;
pub mod classify;
pub mod integrations;
pub mod knowledge;
pub mod thresholds;

use soilgpt_core::error::SoilError;
use soilgpt_core::rules::{self, builtin, schema::ThresholdTable};
use std::path::Path;

/// The custom table if one was given, otherwise the built-in one.
pub fn load_table(path: Option<&Path>) -> Result<ThresholdTable, SoilError> {
    match path {
        Some(path) => rules::load_thresholds(path),
        None => builtin::default_thresholds(),
    }
}
