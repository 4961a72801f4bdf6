use super::compose::{cutoff, Report, MOISTURE_HIGH, MOISTURE_LOW};
use super::ReportGenerator;
use crate::model::SoilRecord;
use crate::router::Topic;
use rust_decimal::Decimal;

const PH_NEUTRAL: Decimal = cutoff(70, 1);
const PH_ACIDIC: Decimal = cutoff(60, 1);

const RETENTION_STRATEGIES: &str = "1. Add organic matter:
   - Compost (3-4 inch layer worked into topsoil)
   - Well-rotted manure
   - Leaf mold

2. Use mulch to reduce evaporation:
   - Straw
   - Wood chips (3-4 inch layer)
   - Leaf litter

3. Consider soil structure:
   - If sandy, add clay and organic matter
   - Use cover crops during off-season
   - Avoid excessive tilling

4. Irrigation strategies:
   - Drip irrigation for efficient water delivery
   - Water deeply but less frequently
   - Water in early morning or evening";

const DRAINAGE_STRATEGIES: &str = "1. Improve soil structure:
   - Add coarse sand
   - Add perlite or vermiculite
   - Avoid compaction

2. Create raised beds:
   - Elevate planting areas 6-12 inches
   - Incorporate good drainage material in raised bed soil

3. Install drainage:
   - French drains for severe cases
   - Swales to direct water away from garden areas

4. Plant selection:
   - Choose plants that tolerate wet conditions
   - Consider water-loving crops for low-lying areas";

const MAINTENANCE_PRACTICES: &str = "1. Continue good practices:
   - Regular addition of organic matter
   - Use of appropriate mulch
   - Balanced irrigation

2. Monitor seasonal changes:
   - Adjust watering during dry or wet periods
   - Check moisture at 2-inch depth before watering
   - Water deeply when needed rather than frequent shallow watering

3. Maintain soil structure:
   - Minimize compaction
   - Use cover crops in off-season
   - Practice conservation tillage";

pub struct MoistureReport;

impl ReportGenerator for MoistureReport {
    fn topic(&self) -> Topic {
        Topic::Moisture
    }

    fn generate(&self, record: &SoilRecord) -> String {
        let (ph, moisture) = (record.ph(), record.moisture());

        let report = if moisture < MOISTURE_LOW {
            let ph_note = if ph > PH_NEUTRAL {
                format!(
                    "Your soil's pH of {ph} also affects water retention. Slightly alkaline soils \
                     may benefit from adding organic matter to improve structure and water retention."
                )
            } else {
                format!("Your soil's pH of {ph} also affects water retention.")
            };
            Report::new()
                .paragraph(format!(
                    "Your soil's moisture level ({moisture}%) is low. \
                     Here are strategies to improve moisture retention:"
                ))
                .paragraph(RETENTION_STRATEGIES)
                .paragraph(ph_note)
        } else if moisture > MOISTURE_HIGH {
            let ph_note = if ph < PH_ACIDIC {
                "is acidic, which is typical of poorly drained soils. Improving drainage may \
                 naturally help balance pH over time."
            } else {
                "should be monitored as you improve drainage."
            };
            Report::new()
                .paragraph(format!(
                    "Your soil's moisture level ({moisture}%) is high, which may cause drainage \
                     issues. Here are strategies to improve drainage:"
                ))
                .paragraph(DRAINAGE_STRATEGIES)
                .paragraph(format!("Your soil's pH of {ph} {ph_note}"))
        } else {
            Report::new()
                .paragraph(format!(
                    "Your soil's moisture level ({moisture}%) is within the optimal range for \
                     most crops. To maintain this balance:"
                ))
                .paragraph(MAINTENANCE_PRACTICES)
                .paragraph(format!(
                    "Your soil's pH of {ph} and nutrient levels (N: {}, P: {}, K: {}) are working \
                     well with your current moisture level. Continue regular soil testing to \
                     maintain this balance.",
                    record.n(),
                    record.p(),
                    record.k()
                ))
        };

        report.paragraph(readings(record)).finish()
    }
}

/// Numeric restatement closing every moisture report.
fn readings(record: &SoilRecord) -> String {
    format!(
        "Current readings:\n\
         Moisture: {}%\n\
         pH: {}\n\
         Nitrogen (N): {} mg/kg\n\
         Phosphorus (P): {} mg/kg\n\
         Potassium (K): {} mg/kg",
        record.moisture(),
        record.ph(),
        record.n(),
        record.p(),
        record.k()
    )
}
