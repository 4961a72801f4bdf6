use soilgpt_core::error::SoilError;
use soilgpt_core::parsing;
use std::path::Path;

use crate::output;

pub fn run(
    csv: &Path,
    query: &str,
    output_format: &str,
    thresholds: Option<&Path>,
) -> Result<(), SoilError> {
    let table = super::load_table(thresholds)?;
    let record = parsing::load_csv(csv)?;
    let analysis = soilgpt_core::analyze_record(record, query, &table);

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => {
            output::table::print_classification(&analysis.classification, &analysis.chart);
            println!("Topic: {}\n", analysis.result.topic);
            output::table::print_report(&analysis.result);
        }
    }

    Ok(())
}
