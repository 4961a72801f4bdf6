use crate::classify::outcome::{ParameterStatus, RecordClassification, Tier};
use crate::model::{Parameter, SoilRecord, Unit};
use crate::parsing::values::parse_value;
use crate::rules::schema::{ParameterBands, ThresholdTable};
use rust_decimal::{Decimal, RoundingStrategy};

/// Classify every reading of a record against a threshold table.
pub fn classify_record(record: &SoilRecord, table: &ThresholdTable) -> RecordClassification {
    let mut statuses: Vec<ParameterStatus> = Parameter::ALL
        .iter()
        .map(|&p| classify(p, record.value(p), table))
        .collect();

    // Extra columns only show up when they hold a number.
    for (name, raw) in record.extra() {
        if parse_value(name, raw).is_ok() {
            statuses.push(ParameterStatus {
                name: name.clone(),
                parameter: None,
                tier: Tier::Neutral,
                display: raw.trim().to_string(),
            });
        }
    }

    RecordClassification {
        sample_id: record.sample_id().to_string(),
        statuses,
    }
}

/// Classify a reading by column name.
///
/// Names outside the five core parameters get a neutral tier instead of an
/// error so that new columns can be displayed before anyone defines bands.
pub fn classify_named(name: &str, value: Decimal, table: &ThresholdTable) -> ParameterStatus {
    match Parameter::from_column(name) {
        Some(parameter) => classify(parameter, value, table),
        None => ParameterStatus {
            name: name.to_string(),
            parameter: None,
            tier: Tier::Neutral,
            display: value.normalize().to_string(),
        },
    }
}

/// Classify a single reading.
pub fn classify(parameter: Parameter, value: Decimal, table: &ThresholdTable) -> ParameterStatus {
    let tier = match table.bands(parameter) {
        Some(bands) => tier_for(value, bands),
        None => Tier::Neutral,
    };

    ParameterStatus {
        name: parameter.column().to_string(),
        parameter: Some(parameter),
        tier,
        display: format_value(parameter, value),
    }
}

fn tier_for(value: Decimal, bands: &ParameterBands) -> Tier {
    let above = |edge: Option<Decimal>| edge.is_some_and(|e| value > e);

    if value < bands.error_below || above(bands.error_above) {
        Tier::Error
    } else if value < bands.warning_below || above(bands.warning_above) {
        Tier::Warning
    } else {
        Tier::Success
    }
}

/// Format a reading with its unit: "3 mg/kg", "8.2", "10%".
///
/// pH always shows exactly one decimal place.
pub fn format_value(parameter: Parameter, value: Decimal) -> String {
    match parameter.unit() {
        Unit::MgPerKg => format!("{} {}", value.normalize(), Unit::MgPerKg),
        Unit::Percent => format!("{}{}", value.normalize(), Unit::Percent),
        Unit::None => {
            let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1}", rounded)
        }
    }
}
