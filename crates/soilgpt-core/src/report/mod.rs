pub mod amendment;
pub mod bean;
pub mod carrot;
pub mod compose;
pub mod general;
pub mod moisture;
pub mod nutrient;
pub mod tomato;

use crate::model::SoilRecord;
use crate::router::{route, Topic};
use serde::{Deserialize, Serialize};

/// A topic-specific report writer.
///
/// Generators are pure: the same record always yields the same text.
pub trait ReportGenerator: Send + Sync {
    /// Topic this generator answers.
    fn topic(&self) -> Topic;

    /// Write the report body (without the sample header).
    fn generate(&self, record: &SoilRecord) -> String;
}

/// Look up the generator for a topic.
pub fn generator_for(topic: Topic) -> &'static dyn ReportGenerator {
    match topic {
        Topic::Tomato => &tomato::TomatoReport,
        Topic::Bean => &bean::BeanReport,
        Topic::Carrot => &carrot::CarrotReport,
        Topic::Amendment => &amendment::AmendmentReport,
        Topic::Moisture => &moisture::MoistureReport,
        Topic::Nutrient => &nutrient::NutrientReport,
        Topic::General => &general::GeneralReport,
    }
}

/// Full report for a topic, prefixed with the sample header.
pub fn generate(topic: Topic, record: &SoilRecord) -> String {
    let body = generator_for(topic).generate(record);
    format!("{}{}", compose::sample_header(record.sample_id()), body)
}

/// Answer to one question about one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub sample_id: String,
    pub topic: Topic,
    pub report_text: String,
}

/// Route a question and write the matching report.
pub fn analyze(record: &SoilRecord, query: &str) -> QueryResult {
    let topic = route(query);
    QueryResult {
        sample_id: record.sample_id().to_string(),
        topic,
        report_text: generate(topic, record),
    }
}
