use super::compose::{
    cutoff, low_or_adequate_title, moisture_level_title, ph_reaction, BulletList, Report,
    MOISTURE_HIGH, MOISTURE_LOW, NITROGEN_LOW, PHOSPHORUS_LOW, POTASSIUM_LOW, PH_ALKALINE,
};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;
use rust_decimal::Decimal;

/// pH window that suits most common vegetables.
const VEGETABLE_PH_LOW: Decimal = cutoff(60, 1);
const VEGETABLE_PH_HIGH: Decimal = cutoff(70, 1);
/// Splits the acid-loving and alkaline-tolerant crop suggestions.
const CROP_PH_SPLIT: Decimal = cutoff(65, 1);

pub struct GeneralReport;

impl ReportGenerator for GeneralReport {
    fn topic(&self) -> Topic {
        Topic::General
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let (n, p, k) = (record.n(), record.p(), record.k());
        let (ph, moisture) = (record.ph(), record.moisture());

        let ph_ok = ph >= VEGETABLE_PH_LOW && ph <= VEGETABLE_PH_HIGH;
        let balanced = n >= NITROGEN_LOW && p >= PHOSPHORUS_LOW && k >= POTASSIUM_LOW;
        let moisture_ok = moisture >= MOISTURE_LOW && moisture <= MOISTURE_HIGH;

        let suitability = BulletList::new("Crop Suitability:")
            .item(if ph_ok {
                "Good pH for most common vegetables"
            } else {
                "pH needs adjustment for optimal crop growth"
            })
            .item(if balanced {
                "Balanced nutrients for general gardening"
            } else {
                "Some nutrient supplementation recommended"
            })
            .item(if moisture_ok {
                "Good moisture level for most crops"
            } else {
                "Moisture management needed"
            });

        // pH exactly at the split suggests neither group.
        let crops = BulletList::new("Well-suited crops for this soil profile:")
            .item_if(
                ph < CROP_PH_SPLIT,
                "Acid-loving plants: potatoes, blueberries, strawberries",
            )
            .item_if(
                ph > CROP_PH_SPLIT,
                "Alkaline-tolerant plants: brassicas, asparagus, beans",
            )
            .item_if(
                n < NITROGEN_LOW,
                "Legumes: beans, peas (which can fix their own nitrogen)",
            )
            .item_if(n >= NITROGEN_LOW, "Leafy greens: lettuce, spinach, kale");

        let improvements = BulletList::new("Soil improvement recommendations:")
            .item_if(ph < VEGETABLE_PH_LOW, "Add lime to raise pH")
            .item_if(ph > PH_ALKALINE, "Add sulfur to lower pH")
            .item_if(n < NITROGEN_LOW, "Add nitrogen-rich amendments (compost, manure)")
            .item_if(p < PHOSPHORUS_LOW, "Add phosphorus (bone meal, rock phosphate)")
            .item_if(k < POTASSIUM_LOW, "Add potassium (wood ash, kelp meal)")
            .item_if(
                moisture < MOISTURE_LOW,
                "Improve water retention with organic matter",
            )
            .item_if(moisture > MOISTURE_HIGH, "Improve drainage with coarse materials")
            .when_empty("No corrective amendments needed.");

        Report::new()
            .paragraph(format!(
                "General Soil Analysis:\n\n\
                 pH: {ph} ({})\n\
                 Nitrogen (N): {n} mg/kg ({})\n\
                 Phosphorus (P): {p} mg/kg ({})\n\
                 Potassium (K): {k} mg/kg ({})\n\
                 Moisture: {moisture}% ({})",
                ph_reaction(ph),
                low_or_adequate_title(n, NITROGEN_LOW),
                low_or_adequate_title(p, PHOSPHORUS_LOW),
                low_or_adequate_title(k, POTASSIUM_LOW),
                moisture_level_title(moisture),
            ))
            .bullets(suitability)
            .bullets(crops)
            .bullets(improvements)
            .paragraph(
                "For a more specific recommendation, please ask about particular crops or \
                 soil health concerns.",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balanced_soil() {
        let r = SoilRecord::new("G", dec!(50), dec!(30), dec!(40), dec!(6.5), dec!(35));
        let text = GeneralReport.generate(&r);
        let expected = "\
General Soil Analysis:

pH: 6.5 (Neutral)
Nitrogen (N): 50 mg/kg (Adequate)
Phosphorus (P): 30 mg/kg (Adequate)
Potassium (K): 40 mg/kg (Adequate)
Moisture: 35% (Optimal)

Crop Suitability:
- Good pH for most common vegetables
- Balanced nutrients for general gardening
- Good moisture level for most crops

Well-suited crops for this soil profile:
- Leafy greens: lettuce, spinach, kale

Soil improvement recommendations:
No corrective amendments needed.

For a more specific recommendation, please ask about particular crops or soil health concerns.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_depleted_alkaline_soil() {
        let r = SoilRecord::new("G", dec!(3), dec!(0.5), dec!(2), dec!(8.2), dec!(10));
        let text = GeneralReport.generate(&r);
        assert!(text.contains("pH: 8.2 (Alkaline)"));
        assert!(text.contains("- pH needs adjustment for optimal crop growth"));
        assert!(text.contains("- Some nutrient supplementation recommended"));
        assert!(text.contains("- Moisture management needed"));
        assert!(text.contains("- Alkaline-tolerant plants"));
        assert!(!text.contains("Acid-loving"));
        assert!(text.contains("- Legumes: beans, peas"));
        assert!(!text.contains("Leafy greens"));
        assert!(text.contains("- Add sulfur to lower pH"));
        assert!(text.contains("- Add nitrogen-rich amendments (compost, manure)"));
        assert!(text.contains("- Improve water retention with organic matter"));
    }

    #[test]
    fn test_acidic_soil_crops() {
        let r = SoilRecord::new("G", dec!(50), dec!(30), dec!(40), dec!(5.8), dec!(35));
        let text = GeneralReport.generate(&r);
        assert!(text.contains("- Acid-loving plants"));
        assert!(!text.contains("Alkaline-tolerant"));
        assert!(text.contains("- Add lime to raise pH"));
    }
}
