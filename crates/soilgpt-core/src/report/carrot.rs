use super::compose::{
    cutoff, low_or_adequate, BulletList, PhFit, PhPreference, Report, MOISTURE_HIGH, MOISTURE_LOW,
    PHOSPHORUS_LOW, POTASSIUM_LOW,
};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;
use rust_decimal::Decimal;

const PREFERENCE: PhPreference = PhPreference {
    low: cutoff(60, 1),
    high: cutoff(70, 1),
};

/// Above this nitrogen level carrots tend to fork.
const NITROGEN_HIGH: Decimal = cutoff(60, 0);

const TEXTURE: &str = "Soil texture is also important for carrots - they need loose, \
                       well-drained soil to develop straight roots.";

pub struct CarrotReport;

impl ReportGenerator for CarrotReport {
    fn topic(&self) -> Topic {
        Topic::Carrot
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let ph = record.ph();
        let range = PREFERENCE.range_text();
        let fit = PREFERENCE.judge(ph, true);
        let n_high = record.n() > NITROGEN_HIGH;
        let p_low = record.p() < PHOSPHORUS_LOW;
        let k_low = record.k() < POTASSIUM_LOW;

        if matches!(fit, PhFit::TooAcidic | PhFit::TooAlkaline) {
            let acidic = fit == PhFit::TooAcidic;
            let (judgement, action, bullet) = if acidic {
                ("too acidic", "Add garden lime to raise", "Add garden lime to raise pH")
            } else {
                ("too alkaline", "Add sulfur to lower", "Add sulfur to lower pH")
            };

            return Report::new()
                .paragraph(format!(
                    "The soil pH of {ph} is {judgement} for optimal carrot growth. \
                     Carrots prefer soil with pH {range}. {action} the pH gradually."
                ))
                .paragraph(nutrient_paragraph(record))
                .paragraph(TEXTURE)
                .bullets(
                    BulletList::new("Recommended amendments:")
                        .item(bullet)
                        .item_if(n_high, "Avoid adding nitrogen-rich fertilizers")
                        .item_if(p_low, "Add bone meal for phosphorus")
                        .item_if(k_low, "Add wood ash for potassium")
                        .item("Add well-rotted compost to improve soil structure"),
                )
                .finish();
        }

        let moisture = record.moisture();
        let moisture_word = if moisture < MOISTURE_LOW {
            "low"
        } else if moisture > MOISTURE_HIGH {
            "high and may cause rot"
        } else {
            "optimal"
        };
        let suitability = if !p_low && !k_low && !n_high {
            "well-suited"
        } else {
            "moderately suited"
        };

        let mut list = BulletList::new(format!(
            "Overall, this soil is {suitability} for carrots with some amendments:"
        ));
        if let Some(correction) = fit.slight_correction() {
            list = list.item(correction);
        }
        let list = list
            .item_if(n_high, "Avoid adding nitrogen-rich fertilizers")
            .item_if(p_low, "Add bone meal for phosphorus")
            .item_if(k_low, "Add wood ash for potassium")
            .item(
                "Add well-rotted compost to improve soil structure and ensure it's loose \
                 for straight root growth",
            );

        Report::new()
            .paragraph(format!(
                "This soil has a {} pH ({ph}) for growing carrots, which prefer pH {range}.",
                fit.adjective()
            ))
            .paragraph(nutrient_paragraph(record))
            .paragraph(format!(
                "Moisture level ({moisture}%) is {moisture_word} for carrots."
            ))
            .paragraph(TEXTURE)
            .bullets(list)
            .finish()
    }
}

fn nutrient_paragraph(record: &SoilRecord) -> String {
    let (n, p, k) = (record.n(), record.p(), record.k());
    let nitrogen_word = if n > NITROGEN_HIGH {
        "actually a bit high, which can cause forked roots"
    } else {
        "fine"
    };
    format!(
        "Carrots don't require high nitrogen levels, so the current level ({n} mg/kg) \
         is {nitrogen_word}. Phosphorus ({p} mg/kg) is {}, and potassium level ({k} mg/kg) is {}.",
        low_or_adequate(p, PHOSPHORUS_LOW),
        low_or_adequate(k, POTASSIUM_LOW),
    )
}
