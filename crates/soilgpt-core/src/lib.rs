pub mod classify;
pub mod error;
pub mod integrations;
pub mod knowledge;
pub mod model;
pub mod parsing;
pub mod report;
pub mod router;
pub mod rules;
pub mod session;

use classify::{NutrientChart, RecordClassification};
use error::SoilError;
use model::SoilRecord;
use report::QueryResult;
use rules::schema::ThresholdTable;
use serde::Serialize;

/// Everything the analyzer shows for one question about one sample.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub record: SoilRecord,
    pub classification: RecordClassification,
    pub chart: NutrientChart,
    pub result: QueryResult,
}

/// Main API entry point: parse a CSV upload and answer a question about it.
///
/// The record is classified against `table`; the report itself uses the
/// fixed cutoffs each generator carries.
pub fn analyze_csv(
    csv_text: &str,
    query: &str,
    table: &ThresholdTable,
) -> Result<Analysis, SoilError> {
    let record = parsing::parse_csv(csv_text)?;
    Ok(analyze_record(record, query, table))
}

/// Same as [`analyze_csv`] for an already parsed record.
pub fn analyze_record(record: SoilRecord, query: &str, table: &ThresholdTable) -> Analysis {
    let classification = classify::classify_record(&record, table);
    let chart = classify::nutrient_proportions(&record);
    let result = report::analyze(&record, query);
    Analysis {
        record,
        classification,
        chart,
        result,
    }
}
