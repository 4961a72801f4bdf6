use soilgpt_core::error::SoilError;
use soilgpt_core::model::Parameter;
use soilgpt_core::rules::schema::ParameterBands;
use std::path::Path;

pub fn explain(thresholds: Option<&Path>) -> Result<(), SoilError> {
    let table = super::load_table(thresholds)?;

    println!("{} (version {})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("Each reading is sorted into one of three tiers:\n");
    println!("  error    -- far outside the healthy range, act before planting");
    println!("  warning  -- outside the healthy range, worth correcting");
    println!("  success  -- within the healthy range\n");

    let max_name_len = table
        .parameters
        .iter()
        .map(|b| b.parameter.label().len())
        .max()
        .unwrap_or(12);

    println!(
        "  {:<width$}  {:<14}  {:<14}  {:<14}  Unit",
        "Parameter",
        "Error",
        "Warning",
        "Success",
        width = max_name_len
    );
    println!("  {}", "-".repeat(max_name_len + 2 + 16 * 3 + 6));

    for bands in &table.parameters {
        let (error, warning, success) = describe(bands);
        println!(
            "  {:<width$}  {:<14}  {:<14}  {:<14}  {}",
            bands.parameter.label(),
            error,
            warning,
            success,
            bands.unit.as_deref().unwrap_or("-"),
            width = max_name_len
        );
    }
    println!();

    let missing: Vec<&str> = Parameter::ALL
        .iter()
        .filter(|p| table.bands(**p).is_none())
        .map(|p| p.column())
        .collect();
    if !missing.is_empty() {
        println!("Not covered (shown as neutral): {}\n", missing.join(", "));
    }

    Ok(())
}

/// Plain-language band ranges: (error, warning, success).
fn describe(b: &ParameterBands) -> (String, String, String) {
    let mut error = format!("<{}", b.error_below);
    let mut warning = format!("{}-<{}", b.error_below, b.warning_below);
    let success = match b.warning_above.or(b.error_above) {
        Some(upper) => format!("{}-{}", b.warning_below, upper),
        None => format!(">={}", b.warning_below),
    };

    match (b.warning_above, b.error_above) {
        (Some(wa), Some(ea)) => {
            error.push_str(&format!(" or >{ea}"));
            warning.push_str(&format!(", >{wa}-{ea}"));
        }
        (Some(wa), None) => warning.push_str(&format!(", >{wa}")),
        (None, Some(ea)) => error.push_str(&format!(" or >{ea}")),
        (None, None) => {}
    }

    (error, warning, success)
}

pub fn schema() -> Result<(), SoilError> {
    print!(
        r#"JSON Threshold Schema
=====================

A threshold file defines the status bands used by `soilgpt classify` and
`soilgpt analyze` to mark each reading as error, warning or success.
The narrative reports use their own fixed cutoffs and are not affected.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "1.0")
  parameters    (array, required)   Bands per parameter (see below)

Each entry in the "parameters" array:
  parameter     (string, required)  One of "N", "P", "K", "pH", "Moisture".
                                    Each parameter may appear once. Missing
                                    parameters are shown as neutral.
  unit          (string, optional)  Unit for display
  error_below   (string, required)  Readings below this are errors
  warning_below (string, required)  Readings below this (and not below
                                    error_below) are warnings
  warning_above (string, optional)  Readings above this are warnings
  error_above   (string, optional)  Readings above this are errors
  adequate_up_to
                (string, optional)  Upper end of the adequate range,
                                    informational only
  note          (string, optional)  Free-text explanation

Lower edges are exclusive and upper edges inclusive: with
error_below "5.5" and warning_below "6.0", a pH of 6.0 is success and
5.99 is a warning; with error_above "8.5", a pH of 8.5 is still a warning.

Bands must be ordered: error_below <= warning_below <= warning_above
<= error_above.

Example:
{{
  "name": "Raised bed bands",
  "version": "1.0",
  "parameters": [
    {{
      "parameter": "pH",
      "error_below": "5.0",
      "warning_below": "6.0",
      "warning_above": "7.0",
      "error_above": "8.0"
    }},
    {{
      "parameter": "N",
      "unit": "mg/kg",
      "error_below": "25",
      "warning_below": "50"
    }}
  ]
}}

Note: band values must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "5.5" not 5.5).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SoilError> {
    let table = soilgpt_core::rules::load_thresholds(file)?;

    println!("Threshold table '{}' (v{}) is valid.", table.name, table.version);
    let covered: Vec<&str> = table.parameters.iter().map(|b| b.parameter.column()).collect();
    println!("  Parameters: {}", covered.join(", "));

    let mut warnings = Vec::new();
    for parameter in Parameter::ALL {
        if table.bands(parameter).is_none() {
            warnings.push(format!(
                "parameter '{}' has no bands and will be shown as neutral",
                parameter.column()
            ));
        }
    }
    for bands in &table.parameters {
        if bands.warning_below == bands.error_below {
            warnings.push(format!(
                "parameter '{}' has no low warning band (error_below equals warning_below)",
                bands.parameter.column()
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilgpt_core::rules::builtin::default_thresholds;

    #[test]
    fn test_describe_ph_bands() {
        let table = default_thresholds().unwrap();
        let (error, warning, success) = describe(table.bands(Parameter::Ph).unwrap());
        assert_eq!(error, "<5.5 or >8.5");
        assert_eq!(warning, "5.5-<6.0, >7.5-8.5");
        assert_eq!(success, "6.0-7.5");
    }

    #[test]
    fn test_describe_open_ended_bands() {
        let table = default_thresholds().unwrap();
        let (error, warning, success) = describe(table.bands(Parameter::Nitrogen).unwrap());
        assert_eq!(error, "<20");
        assert_eq!(warning, "20-<40");
        assert_eq!(success, ">=40");
    }

    #[test]
    fn test_describe_moisture_has_no_upper_error() {
        let table = default_thresholds().unwrap();
        let (error, warning, success) = describe(table.bands(Parameter::Moisture).unwrap());
        assert_eq!(error, "<10");
        assert_eq!(warning, "10-<20, >60");
        assert_eq!(success, "20-60");
    }
}
