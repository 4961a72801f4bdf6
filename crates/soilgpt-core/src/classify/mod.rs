pub mod chart;
pub mod engine;
pub mod outcome;

pub use chart::nutrient_proportions;
pub use engine::{classify, classify_named, classify_record};
pub use outcome::{ChartSlice, NutrientChart, ParameterStatus, RecordClassification, Tier};
