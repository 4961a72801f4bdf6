use crate::model::Parameter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status bands for each soil parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub parameters: Vec<ParameterBands>,
}

impl ThresholdTable {
    /// Bands for a parameter, if the table defines them.
    pub fn bands(&self, parameter: Parameter) -> Option<&ParameterBands> {
        self.parameters.iter().find(|b| b.parameter == parameter)
    }
}

/// Band edges for one parameter.
///
/// Lower edges are exclusive (a value equal to `warning_below` is already in
/// range); upper edges are inclusive (a value equal to `error_above` is still
/// only a warning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterBands {
    pub parameter: Parameter,
    #[serde(default)]
    pub unit: Option<String>,
    pub error_below: Decimal,
    pub warning_below: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_above: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_above: Option<Decimal>,
    /// Upper end of the "adequate" range; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adequate_up_to: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
}
