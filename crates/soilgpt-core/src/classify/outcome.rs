use crate::model::Parameter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity bucket for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Error,
    Warning,
    Success,
    /// Readings with no bands to compare against.
    Neutral,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Error => write!(f, "error"),
            Tier::Warning => write!(f, "warning"),
            Tier::Success => write!(f, "success"),
            Tier::Neutral => write!(f, "neutral"),
        }
    }
}

/// Classification of one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterStatus {
    /// Column name as uploaded (e.g. "pH", "Calcium").
    pub name: String,
    /// The core parameter, or None for extra columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Parameter>,
    pub tier: Tier,
    /// Value with its unit, ready for display (e.g. "3 mg/kg", "8.2", "10%").
    pub display: String,
}

/// Per-parameter classification of a whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordClassification {
    pub sample_id: String,
    /// Core parameters in fixed order, then numeric extra columns.
    pub statuses: Vec<ParameterStatus>,
}

impl RecordClassification {
    pub fn status(&self, parameter: Parameter) -> Option<&ParameterStatus> {
        self.statuses
            .iter()
            .find(|s| s.parameter == Some(parameter))
    }
}

/// One slice of the N/P/K proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    /// Raw reading, never rescaled.
    pub value: Decimal,
    /// Share of the N+P+K total in percent, one decimal place.
    pub share_pct: Decimal,
}

/// Three-slice N/P/K proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientChart {
    pub slices: Vec<ChartSlice>,
}
