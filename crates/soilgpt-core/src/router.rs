use serde::{Deserialize, Serialize};
use std::fmt;

/// Report branch selected for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Tomato,
    Bean,
    Carrot,
    Amendment,
    Moisture,
    Nutrient,
    General,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Tomato => "tomato",
            Topic::Bean => "bean",
            Topic::Carrot => "carrot",
            Topic::Amendment => "amendment",
            Topic::Moisture => "moisture",
            Topic::Nutrient => "nutrient",
            Topic::General => "general",
        };
        f.write_str(name)
    }
}

/// Trigger words per topic, in priority order. The first topic with a
/// matching word wins, so a question about "tomato moisture" is a tomato
/// question.
const ROUTES: &[(Topic, &[&str])] = &[
    (Topic::Tomato, &["tomato", "tomatoes"]),
    (Topic::Bean, &["bean", "beans"]),
    (Topic::Carrot, &["carrot", "carrots"]),
    (Topic::Amendment, &["amendment", "improve"]),
    (Topic::Moisture, &["moisture", "water"]),
    (Topic::Nutrient, &["nutrient", "fertilizer"]),
];

/// Pick the report topic for a free-text question.
///
/// Matching is a case-insensitive substring test, so "watering" counts as a
/// moisture question. Anything unmatched, including an empty question, is
/// General.
pub fn route(query: &str) -> Topic {
    let lower = query.to_lowercase();
    let topic = ROUTES
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General);

    tracing::debug!(%topic, query, "routed query");
    topic
}
