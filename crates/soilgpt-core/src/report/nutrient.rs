use super::compose::{cutoff, ph_reaction, BulletList, Report, PH_ALKALINE};
use super::ReportGenerator;
use crate::model::{Parameter, SoilRecord};
use crate::router::Topic;
use rust_decimal::Decimal;

/// Four-tier nutrient level. Cutoffs are local to this report and differ from
/// the status bands used for color-coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NutrientLevel {
    VeryLow,
    Low,
    Adequate,
    High,
}

impl NutrientLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NutrientLevel::VeryLow => "Very Low",
            NutrientLevel::Low => "Low",
            NutrientLevel::Adequate => "Adequate",
            NutrientLevel::High => "High",
        }
    }
}

/// Upper (exclusive) edges of Very Low, Low and Adequate.
struct LevelCutoffs {
    very_low: Decimal,
    low: Decimal,
    adequate: Decimal,
}

impl LevelCutoffs {
    fn level(&self, value: Decimal) -> NutrientLevel {
        if value < self.very_low {
            NutrientLevel::VeryLow
        } else if value < self.low {
            NutrientLevel::Low
        } else if value < self.adequate {
            NutrientLevel::Adequate
        } else {
            NutrientLevel::High
        }
    }
}

const NITROGEN: LevelCutoffs = LevelCutoffs {
    very_low: cutoff(20, 0),
    low: cutoff(40, 0),
    adequate: cutoff(80, 0),
};
const PHOSPHORUS: LevelCutoffs = LevelCutoffs {
    very_low: cutoff(10, 0),
    low: cutoff(25, 0),
    adequate: cutoff(50, 0),
};
const POTASSIUM: LevelCutoffs = LevelCutoffs {
    very_low: cutoff(15, 0),
    low: cutoff(30, 0),
    adequate: cutoff(60, 0),
};

/// Nutrient level of a reading under this report's cutoffs.
pub fn nutrient_level(parameter: Parameter, value: Decimal) -> Option<NutrientLevel> {
    let cutoffs = match parameter {
        Parameter::Nitrogen => &NITROGEN,
        Parameter::Phosphorus => &PHOSPHORUS,
        Parameter::Potassium => &POTASSIUM,
        Parameter::Ph | Parameter::Moisture => return None,
    };
    Some(cutoffs.level(value))
}

struct Feeding {
    parameter: Parameter,
    fertilizers: &'static str,
    heavy: &'static str,
    moderate: &'static str,
}

static FEEDING: [Feeding; 3] = [
    Feeding {
        parameter: Parameter::Nitrogen,
        fertilizers: "For Nitrogen:
- Blood meal (13-0-0)
- Composted manure (1-1-1)
- Alfalfa meal (2.5-0.5-2.5)",
        heavy: "Heavy nitrogen feeding (10-20 lbs per 1,000 sq ft of high-nitrogen amendment)",
        moderate: "Moderate nitrogen feeding (5-10 lbs per 1,000 sq ft of nitrogen amendment)",
    },
    Feeding {
        parameter: Parameter::Phosphorus,
        fertilizers: "For Phosphorus:
- Bone meal (3-15-0)
- Rock phosphate (0-3-0)
- Fish meal (6-6-0)",
        heavy: "Heavy phosphorus feeding (10-20 lbs per 1,000 sq ft of bone meal)",
        moderate: "Moderate phosphorus feeding (5-10 lbs per 1,000 sq ft of bone meal)",
    },
    Feeding {
        parameter: Parameter::Potassium,
        fertilizers: "For Potassium:
- Wood ash (0-1-3)
- Kelp meal (1-0-2)
- Greensand (0-0-3)",
        heavy: "Heavy potassium feeding (10-20 lbs per 1,000 sq ft of wood ash or kelp)",
        moderate: "Moderate potassium feeding (5-10 lbs per 1,000 sq ft of wood ash or kelp)",
    },
];

pub struct NutrientReport;

impl ReportGenerator for NutrientReport {
    fn topic(&self) -> Topic {
        Topic::Nutrient
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let ph = record.ph();
        let levels: Vec<(Parameter, Decimal, NutrientLevel)> = FEEDING
            .iter()
            .map(|f| {
                let value = record.value(f.parameter);
                let level = nutrient_level(f.parameter, value).unwrap_or(NutrientLevel::Adequate);
                (f.parameter, value, level)
            })
            .collect();

        let level_lines: Vec<String> = levels
            .iter()
            .map(|(p, value, level)| format!("{}: {value} mg/kg - {}", p.label(), level.label()))
            .collect();

        let availability = if ph < cutoff(60, 1) || ph > PH_ALKALINE {
            "Your current pH may limit the availability of some nutrients."
        } else {
            "Your pH is in a good range for nutrient availability."
        };

        let mut report = Report::new()
            .paragraph("Nutrient Analysis of Your Soil:")
            .paragraph(level_lines.join("\n"))
            .paragraph(format!(
                "pH: {ph} ({})\nNote: pH affects nutrient availability. {availability}",
                ph_reaction(ph)
            ))
            .paragraph("Recommended organic fertilizers based on your analysis:");

        let deficient: Vec<&Feeding> = FEEDING
            .iter()
            .zip(&levels)
            .filter(|(_, (_, _, level))| *level <= NutrientLevel::Low)
            .map(|(f, _)| f)
            .collect();

        if deficient.is_empty() {
            report = report.paragraph(
                "No supplemental fertilizer needed; all three nutrients are at adequate levels.",
            );
        }
        for feeding in &deficient {
            report = report.paragraph(feeding.fertilizers);
        }

        let mut rates = BulletList::new("Application rates:")
            .when_empty("No supplemental feeding needed at current levels.");
        for (feeding, (_, _, level)) in FEEDING.iter().zip(&levels) {
            rates = rates
                .item_if(*level == NutrientLevel::VeryLow, feeding.heavy)
                .item_if(*level == NutrientLevel::Low, feeding.moderate);
        }

        report
            .bullets(rates)
            .paragraph(
                "For balanced improvement, consider a high-quality compost application \
                 (2-3 inch layer) worked into the top 6 inches of soil.",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Parameter::Nitrogen, dec!(19), NutrientLevel::VeryLow)]
    #[case(Parameter::Nitrogen, dec!(20), NutrientLevel::Low)]
    #[case(Parameter::Nitrogen, dec!(79), NutrientLevel::Adequate)]
    #[case(Parameter::Nitrogen, dec!(80), NutrientLevel::High)]
    #[case(Parameter::Phosphorus, dec!(9), NutrientLevel::VeryLow)]
    #[case(Parameter::Phosphorus, dec!(25), NutrientLevel::Adequate)]
    #[case(Parameter::Phosphorus, dec!(50), NutrientLevel::High)]
    #[case(Parameter::Potassium, dec!(15), NutrientLevel::Low)]
    #[case(Parameter::Potassium, dec!(60), NutrientLevel::High)]
    fn test_levels(#[case] parameter: Parameter, #[case] value: Decimal, #[case] expected: NutrientLevel) {
        assert_eq!(nutrient_level(parameter, value), Some(expected));
    }

    #[test]
    fn test_ph_has_no_nutrient_level() {
        assert_eq!(nutrient_level(Parameter::Ph, dec!(6.5)), None);
    }

    #[test]
    fn test_depleted_soil() {
        let r = SoilRecord::new("S1", dec!(3), dec!(0.5), dec!(2), dec!(8.2), dec!(10));
        let text = NutrientReport.generate(&r);
        assert!(text.contains("Nitrogen (N): 3 mg/kg - Very Low"));
        assert!(text.contains("Phosphorus (P): 0.5 mg/kg - Very Low"));
        assert!(text.contains("Potassium (K): 2 mg/kg - Very Low"));
        assert!(text.contains("pH: 8.2 (Alkaline)"));
        assert!(text.contains("may limit the availability"));
        assert!(text.contains("For Nitrogen:\n- Blood meal (13-0-0)"));
        assert!(text.contains("For Phosphorus:"));
        assert!(text.contains("For Potassium:"));
        assert!(text.contains("- Heavy nitrogen feeding"));
        assert!(text.contains("- Heavy phosphorus feeding"));
        assert!(text.contains("- Heavy potassium feeding"));
    }

    #[test]
    fn test_moderate_rates() {
        let r = SoilRecord::new("S2", dec!(30), dec!(60), dec!(20), dec!(6.8), dec!(35));
        let text = NutrientReport.generate(&r);
        assert!(text.contains("Nitrogen (N): 30 mg/kg - Low"));
        assert!(text.contains("Phosphorus (P): 60 mg/kg - High"));
        assert!(text.contains("- Moderate nitrogen feeding"));
        assert!(text.contains("- Moderate potassium feeding"));
        assert!(!text.contains("For Phosphorus:"));
        assert!(!text.contains("phosphorus feeding"));
        assert!(text.contains("Your pH is in a good range"));
    }

    #[test]
    fn test_adequate_soil_has_no_feeding() {
        let r = SoilRecord::new("S3", dec!(50), dec!(30), dec!(40), dec!(6.5), dec!(35));
        let text = NutrientReport.generate(&r);
        assert!(text.contains("Application rates:\nNo supplemental feeding needed at current levels."));
        assert!(!text.contains("For Nitrogen:"));
        assert!(text.ends_with("worked into the top 6 inches of soil."));
    }
}
