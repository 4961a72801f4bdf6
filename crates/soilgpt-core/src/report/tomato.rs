use super::compose::{
    cutoff, low_or_adequate, moisture_level, BulletList, PhFit, PhPreference, Report, NITROGEN_LOW,
    PHOSPHORUS_LOW, POTASSIUM_LOW,
};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;

const PREFERENCE: PhPreference = PhPreference {
    low: cutoff(60, 1),
    high: cutoff(68, 1),
};

pub struct TomatoReport;

impl ReportGenerator for TomatoReport {
    fn topic(&self) -> Topic {
        Topic::Tomato
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let ph = record.ph();
        let range = PREFERENCE.range_text();
        let fit = PREFERENCE.judge(ph, true);
        let p_low = record.p() < PHOSPHORUS_LOW;
        let k_low = record.k() < POTASSIUM_LOW;

        match fit {
            PhFit::TooAlkaline => Report::new()
                .paragraph(format!(
                    "The soil with pH {ph} is too alkaline for optimal tomato growth. \
                     Tomatoes prefer slightly acidic to neutral soil with pH {range}. \
                     Consider adding sulfur or peat moss to lower the pH gradually."
                ))
                .paragraph(nutrient_paragraph(record, "good phosphorus levels for flowering and fruiting"))
                .bullets(
                    BulletList::new("Recommended amendments:")
                        .item("Add elemental sulfur to lower pH")
                        .item_if(p_low, "Apply bone meal or rock phosphate for phosphorus")
                        .item_if(k_low, "Add wood ash or a potassium-rich organic fertilizer")
                        .item("Add compost to improve overall soil structure"),
                )
                .finish(),
            PhFit::TooAcidic => Report::new()
                .paragraph(format!(
                    "The soil with pH {ph} is too acidic for tomatoes. \
                     Tomatoes prefer slightly acidic to neutral soil with pH {range}. \
                     Add garden lime to raise the pH gradually."
                ))
                .paragraph(nutrient_paragraph(record, "good phosphorus levels for flowering and fruiting"))
                .bullets(
                    BulletList::new("Recommended amendments:")
                        .item("Add garden lime to raise pH")
                        .item_if(p_low, "Add bone meal for phosphorus")
                        .item_if(k_low, "Use wood ash or a potassium-rich organic fertilizer")
                        .item("Add compost to improve overall soil structure"),
                )
                .finish(),
            _ => {
                let moisture = record.moisture();
                let suitability = if !p_low && !k_low {
                    "well-suited"
                } else {
                    "moderately suited"
                };

                let mut list = BulletList::new(format!(
                    "Overall, this soil is {suitability} for tomatoes with some minor amendments:"
                ));
                if let Some(correction) = fit.slight_correction() {
                    list = list.item(correction);
                }
                let list = list
                    .item_if(p_low, "Add bone meal for phosphorus to support fruiting")
                    .item_if(k_low, "Add wood ash or kelp meal for potassium")
                    .item("Add compost to improve overall soil structure");

                Report::new()
                    .paragraph(format!(
                        "This soil has a {} pH ({ph}) for growing tomatoes, which prefer pH {range}.",
                        fit.adjective()
                    ))
                    .paragraph(nutrient_paragraph(record, "good phosphorus for fruiting"))
                    .paragraph(format!(
                        "Moisture level ({moisture}%) is {} for tomatoes.",
                        moisture_level(moisture)
                    ))
                    .bullets(list)
                    .finish()
            }
        }
    }
}

fn nutrient_paragraph(record: &SoilRecord, phosphorus_need: &str) -> String {
    let (n, p, k) = (record.n(), record.p(), record.k());
    format!(
        "Nitrogen level ({n} mg/kg) is {} for tomatoes. \
         Phosphorus ({p} mg/kg) is {}, and tomatoes need {phosphorus_need}. \
         Potassium level ({k} mg/kg) is {}.",
        low_or_adequate(n, NITROGEN_LOW),
        low_or_adequate(p, PHOSPHORUS_LOW),
        low_or_adequate(k, POTASSIUM_LOW),
    )
}
