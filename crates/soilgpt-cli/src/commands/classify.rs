use serde::Serialize;
use soilgpt_core::classify::{self, NutrientChart, RecordClassification};
use soilgpt_core::error::SoilError;
use soilgpt_core::parsing;
use std::path::Path;

use crate::output;

#[derive(Serialize)]
struct ClassifyOutput {
    classification: RecordClassification,
    chart: NutrientChart,
}

pub fn run(csv: &Path, output_format: &str, thresholds: Option<&Path>) -> Result<(), SoilError> {
    let table = super::load_table(thresholds)?;
    let record = parsing::load_csv(csv)?;
    let result = ClassifyOutput {
        classification: classify::classify_record(&record, &table),
        chart: classify::nutrient_proportions(&record),
    };

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_classification(&result.classification, &result.chart),
    }

    Ok(())
}
