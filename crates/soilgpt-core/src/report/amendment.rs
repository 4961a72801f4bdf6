use super::compose::{
    cutoff, low_or_adequate_title, moisture_level_title, BulletList, Report, MOISTURE_HIGH,
    MOISTURE_LOW, NITROGEN_LOW, PHOSPHORUS_LOW, POTASSIUM_LOW, PH_ALKALINE,
};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;
use rust_decimal::Decimal;

/// Below this the amendment report recommends raising pH.
const PH_RAISE_BELOW: Decimal = cutoff(60, 1);

const TIMING: &str = "Application timing:
- pH amendments: Apply in fall for winter breakdown
- Nutrient amendments: Apply 2-4 weeks before planting
- Structural amendments: Incorporate anytime soil is being worked";

pub struct AmendmentReport;

impl ReportGenerator for AmendmentReport {
    fn topic(&self) -> Topic {
        Topic::Amendment
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let (n, p, k) = (record.n(), record.p(), record.k());
        let (ph, moisture) = (record.ph(), record.moisture());

        let reaction = if ph < PH_RAISE_BELOW {
            "Acidic"
        } else if ph > PH_ALKALINE {
            "Alkaline"
        } else {
            "Neutral"
        };

        let amendments = BulletList::new("Recommended amendments:")
            .item_if(ph < PH_RAISE_BELOW, "Garden lime or wood ash to raise pH")
            .item_if(ph > PH_ALKALINE, "Elemental sulfur or peat moss to lower pH")
            .item_if(
                n < NITROGEN_LOW,
                "Compost, well-rotted manure, or blood meal for nitrogen",
            )
            .item_if(p < PHOSPHORUS_LOW, "Bone meal or rock phosphate for phosphorus")
            .item_if(k < POTASSIUM_LOW, "Wood ash, kelp meal, or greensand for potassium")
            .item_if(
                moisture < MOISTURE_LOW,
                "Compost or well-rotted manure to improve water retention",
            )
            .item_if(moisture > MOISTURE_HIGH, "Coarse sand or perlite to improve drainage")
            .item("Cover crops during off-season to build soil structure and prevent erosion");

        Report::new()
            .paragraph(
                "Based on your soil analysis, here are recommended amendments to improve soil health:",
            )
            .paragraph(format!(
                "pH: {ph} ({reaction})\n\
                 Nitrogen: {n} mg/kg ({})\n\
                 Phosphorus: {p} mg/kg ({})\n\
                 Potassium: {k} mg/kg ({})\n\
                 Moisture: {moisture}% ({})",
                low_or_adequate_title(n, NITROGEN_LOW),
                low_or_adequate_title(p, PHOSPHORUS_LOW),
                low_or_adequate_title(k, POTASSIUM_LOW),
                moisture_level_title(moisture),
            ))
            .bullets(amendments)
            .paragraph(TIMING)
            .paragraph("Retest soil after one growing season to track improvements.")
            .finish()
    }
}
