use super::compose::{
    cutoff, low_or_adequate, moisture_level, BulletList, PhFit, PhPreference, Report, NITROGEN_LOW,
    PHOSPHORUS_LOW, POTASSIUM_LOW,
};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;

const PREFERENCE: PhPreference = PhPreference {
    low: cutoff(60, 1),
    high: cutoff(70, 1),
};

const INOCULATE: &str =
    "Consider inoculating bean seeds with rhizobium bacteria to enhance nitrogen fixation";

/// Beans are legumes: nitrogen is reported but never drives an amendment.
pub struct BeanReport;

impl ReportGenerator for BeanReport {
    fn topic(&self) -> Topic {
        Topic::Bean
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let ph = record.ph();
        let range = PREFERENCE.range_text();
        // Bean reports have no separate too-acidic branch.
        let fit = PREFERENCE.judge(ph, false);
        let p_low = record.p() < PHOSPHORUS_LOW;
        let k_low = record.k() < POTASSIUM_LOW;

        if fit == PhFit::TooAlkaline {
            return Report::new()
                .paragraph(format!(
                    "The soil with pH {ph} is too alkaline for optimal bean growth. \
                     Beans generally prefer slightly acidic to neutral soil with pH {range}. \
                     Consider adding sulfur or peat moss to lower the pH gradually."
                ))
                .paragraph(nutrient_paragraph(
                    record,
                    "As legumes, beans can fix their own nitrogen from the air",
                    "root development and pod production",
                ))
                .bullets(
                    BulletList::new("Recommended amendments:")
                        .item("Add elemental sulfur to lower pH")
                        .item_if(p_low, "Apply bone meal or rock phosphate for phosphorus")
                        .item_if(k_low, "Add wood ash or a potassium-rich organic fertilizer")
                        .item(INOCULATE),
                )
                .finish();
        }

        let moisture = record.moisture();
        let suitability = if fit == PhFit::Good && !p_low {
            "well-suited"
        } else {
            "moderately suited"
        };

        let mut list = BulletList::new(format!(
            "Overall, this soil is {suitability} for beans with some minor amendments:"
        ));
        if let Some(correction) = fit.slight_correction() {
            list = list.item(correction);
        }
        let list = list
            .item_if(p_low, "Add bone meal for phosphorus")
            .item_if(k_low, "Add wood ash or kelp meal for potassium")
            .item(INOCULATE);

        Report::new()
            .paragraph(format!(
                "This soil has a {} pH ({ph}) for growing beans, which prefer pH {range}.",
                fit.adjective()
            ))
            .paragraph(nutrient_paragraph(
                record,
                "As legumes, beans can fix their own nitrogen from the air through \
                 symbiotic bacteria in their root nodules",
                "good root development and pod production",
            ))
            .paragraph(format!(
                "Moisture level ({moisture}%) is {} for beans.",
                moisture_level(moisture)
            ))
            .bullets(list)
            .finish()
    }
}

fn nutrient_paragraph(record: &SoilRecord, legume_note: &str, phosphorus_use: &str) -> String {
    let (n, p, k) = (record.n(), record.p(), record.k());
    format!(
        "{legume_note}, so the current nitrogen level ({n} mg/kg, {}) is less critical. \
         Phosphorus ({p} mg/kg) is {}, and beans need phosphorus for {phosphorus_use}. \
         Potassium level ({k} mg/kg) is {}.",
        low_or_adequate(n, NITROGEN_LOW),
        low_or_adequate(p, PHOSPHORUS_LOW),
        low_or_adequate(k, POTASSIUM_LOW),
    )
}
