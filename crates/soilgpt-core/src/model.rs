use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five readings every soil sample carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "Moisture")]
    Moisture,
}

impl Parameter {
    /// Fixed display and classification order.
    pub const ALL: [Parameter; 5] = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::Ph,
        Parameter::Moisture,
    ];

    /// Column name used in uploaded CSV files.
    pub fn column(&self) -> &'static str {
        match self {
            Parameter::Nitrogen => "N",
            Parameter::Phosphorus => "P",
            Parameter::Potassium => "K",
            Parameter::Ph => "pH",
            Parameter::Moisture => "Moisture",
        }
    }

    /// Exact column-name lookup (CSV headers are case-sensitive).
    pub fn from_column(name: &str) -> Option<Parameter> {
        Parameter::ALL.into_iter().find(|p| p.column() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Nitrogen => "Nitrogen (N)",
            Parameter::Phosphorus => "Phosphorus (P)",
            Parameter::Potassium => "Potassium (K)",
            Parameter::Ph => "pH",
            Parameter::Moisture => "Moisture",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Parameter::Nitrogen | Parameter::Phosphorus | Parameter::Potassium => Unit::MgPerKg,
            Parameter::Ph => Unit::None,
            Parameter::Moisture => Unit::Percent,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mg/kg")]
    #[default]
    MgPerKg,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "")]
    None,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::MgPerKg => write!(f, "mg/kg"),
            Unit::Percent => write!(f, "%"),
            Unit::None => Ok(()),
        }
    }
}

/// A single soil sample as uploaded by the user.
///
/// Values are normalized on construction so that `8.20` and `8.2` render
/// identically in reports. Records are immutable once built; a new upload
/// produces a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoilRecord {
    #[serde(rename = "sampleId")]
    sample_id: String,
    #[serde(rename = "N")]
    n: Decimal,
    #[serde(rename = "P")]
    p: Decimal,
    #[serde(rename = "K")]
    k: Decimal,
    #[serde(rename = "pH")]
    ph: Decimal,
    #[serde(rename = "Moisture")]
    moisture: Decimal,
    /// Columns beyond the required six, kept verbatim.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    extra: BTreeMap<String, String>,
}

impl SoilRecord {
    pub fn new(
        sample_id: impl Into<String>,
        n: Decimal,
        p: Decimal,
        k: Decimal,
        ph: Decimal,
        moisture: Decimal,
    ) -> Self {
        SoilRecord {
            sample_id: sample_id.into(),
            n: n.normalize(),
            p: p.normalize(),
            k: k.normalize(),
            ph: ph.normalize(),
            moisture: moisture.normalize(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    pub fn sample_id(&self) -> &str {
        &self.sample_id
    }

    pub fn value(&self, parameter: Parameter) -> Decimal {
        match parameter {
            Parameter::Nitrogen => self.n,
            Parameter::Phosphorus => self.p,
            Parameter::Potassium => self.k,
            Parameter::Ph => self.ph,
            Parameter::Moisture => self.moisture,
        }
    }

    pub fn n(&self) -> Decimal {
        self.n
    }

    pub fn p(&self) -> Decimal {
        self.p
    }

    pub fn k(&self) -> Decimal {
        self.k
    }

    pub fn ph(&self) -> Decimal {
        self.ph
    }

    pub fn moisture(&self) -> Decimal {
        self.moisture
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_values_are_normalized() {
        let r = SoilRecord::new("S1", dec!(3.00), dec!(0.50), dec!(2), dec!(8.20), dec!(10.0));
        assert_eq!(r.n().to_string(), "3");
        assert_eq!(r.p().to_string(), "0.5");
        assert_eq!(r.ph().to_string(), "8.2");
        assert_eq!(r.moisture().to_string(), "10");
    }

    #[test]
    fn test_value_by_parameter() {
        let r = SoilRecord::new("S1", dec!(1), dec!(2), dec!(3), dec!(6.5), dec!(35));
        assert_eq!(r.value(Parameter::Potassium), dec!(3));
        assert_eq!(r.value(Parameter::Ph), dec!(6.5));
    }

    #[test]
    fn test_column_round_trip() {
        for p in Parameter::ALL {
            assert_eq!(Parameter::from_column(p.column()), Some(p));
        }
        assert_eq!(Parameter::from_column("ph"), None);
    }

    #[test]
    fn test_units() {
        assert_eq!(Parameter::Potassium.unit(), Unit::MgPerKg);
        assert_eq!(Parameter::Moisture.unit().to_string(), "%");
        assert_eq!(Parameter::Ph.unit().to_string(), "");
    }

    #[test]
    fn test_serializes_with_upload_column_names() {
        let r = SoilRecord::new("S1", dec!(3), dec!(0.5), dec!(2), dec!(8.2), dec!(10));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["sampleId"], "S1");
        assert_eq!(json["pH"], "8.2");
        assert!(json.get("extra").is_none());
    }
}
