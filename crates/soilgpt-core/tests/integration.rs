//! End-to-end tests: CSV text in, classification and report out.

use pretty_assertions::assert_eq;
use soilgpt_core::analyze_csv;
use soilgpt_core::classify::Tier;
use soilgpt_core::error::SoilError;
use soilgpt_core::knowledge::KnowledgeBase;
use soilgpt_core::model::Parameter;
use soilgpt_core::router::Topic;
use soilgpt_core::rules::builtin::default_thresholds;
use soilgpt_core::session::Session;
use std::time::Duration;

const DEPLETED: &str = "sampleId,N,P,K,pH,Moisture\nS1,3,0.5,2,8.2,10\n";
const BALANCED: &str = "sampleId,N,P,K,pH,Moisture\nS2,50,30,40,6.5,35\n";

// ---------------------------------------------------------------------------
// Tomato question on depleted alkaline soil
// ---------------------------------------------------------------------------
#[test]
fn tomato_question_on_depleted_alkaline_soil() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(DEPLETED, "Is this good for tomatoes?", &table).unwrap();

    assert_eq!(analysis.result.topic, Topic::Tomato);
    assert_eq!(analysis.result.sample_id, "S1");

    let text = &analysis.result.report_text;
    assert!(text.starts_with("[Sample ID: S1]\n\n"));
    assert!(text.contains("pH 8.2 is too alkaline"));
    assert!(text.contains("sulfur or peat moss"));
    assert!(text.contains("bone meal"));
    assert!(text.contains("Nitrogen level (3 mg/kg) is low"));
}

#[test]
fn depleted_soil_classification() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(DEPLETED, "anything", &table).unwrap();
    let tier = |p| analysis.classification.status(p).unwrap().tier;

    assert_eq!(tier(Parameter::Nitrogen), Tier::Error);
    assert_eq!(tier(Parameter::Phosphorus), Tier::Error);
    assert_eq!(tier(Parameter::Potassium), Tier::Error);
    assert_eq!(tier(Parameter::Ph), Tier::Warning);
    assert_eq!(tier(Parameter::Moisture), Tier::Warning);
}

// ---------------------------------------------------------------------------
// Amendment question lists every correction plus the fixed blocks
// ---------------------------------------------------------------------------
#[test]
fn amendment_question_lists_every_correction() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(DEPLETED, "What amendments should I add?", &table).unwrap();
    assert_eq!(analysis.result.topic, Topic::Amendment);

    let text = &analysis.result.report_text;
    let bullets: Vec<&str> = text
        .split("Recommended amendments:\n")
        .nth(1)
        .unwrap()
        .split("\n\n")
        .next()
        .unwrap()
        .lines()
        .collect();
    assert_eq!(
        bullets,
        vec![
            "- Elemental sulfur or peat moss to lower pH",
            "- Compost, well-rotted manure, or blood meal for nitrogen",
            "- Bone meal or rock phosphate for phosphorus",
            "- Wood ash, kelp meal, or greensand for potassium",
            "- Compost or well-rotted manure to improve water retention",
            "- Cover crops during off-season to build soil structure and prevent erosion",
        ]
    );
    assert!(text.contains("Application timing:\n- pH amendments: Apply in fall for winter breakdown"));
}

// ---------------------------------------------------------------------------
// General question on balanced soil
// ---------------------------------------------------------------------------
#[test]
fn general_question_on_balanced_soil() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(BALANCED, "general", &table).unwrap();
    assert_eq!(analysis.result.topic, Topic::General);

    let text = &analysis.result.report_text;
    assert!(text.contains(
        "Crop Suitability:\n\
         - Good pH for most common vegetables\n\
         - Balanced nutrients for general gardening\n\
         - Good moisture level for most crops"
    ));
    assert!(text.contains("Soil improvement recommendations:\nNo corrective amendments needed."));
    assert!(analysis
        .classification
        .statuses
        .iter()
        .all(|s| s.tier == Tier::Success));
}

#[test]
fn unroutable_query_falls_back_to_general() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(BALANCED, "", &table).unwrap();
    assert_eq!(analysis.result.topic, Topic::General);
}

#[test]
fn routing_priority_tomato_over_moisture() {
    let table = default_thresholds().unwrap();
    let analysis = analyze_csv(BALANCED, "tomato moisture", &table).unwrap();
    assert_eq!(analysis.result.topic, Topic::Tomato);
}

#[test]
fn reports_are_idempotent() {
    let table = default_thresholds().unwrap();
    for query in ["tomato", "bean", "carrot", "amend", "water", "fertilizer", "hello"] {
        let a = analyze_csv(DEPLETED, query, &table).unwrap();
        let b = analyze_csv(DEPLETED, query, &table).unwrap();
        assert_eq!(a.result, b.result);
    }
}

// ---------------------------------------------------------------------------
// Extra columns and chart
// ---------------------------------------------------------------------------
#[test]
fn extra_columns_are_neutral() {
    let table = default_thresholds().unwrap();
    let csv = "sampleId,N,P,K,pH,Moisture,Calcium\nS3,50,30,40,6.5,35,120\n";
    let analysis = analyze_csv(csv, "general", &table).unwrap();
    let extra = analysis.classification.statuses.last().unwrap();
    assert_eq!(extra.name, "Calcium");
    assert_eq!(extra.tier, Tier::Neutral);
    assert_eq!(analysis.chart.slices.len(), 3);
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------
#[test]
fn missing_column_is_reported_by_name() {
    let table = default_thresholds().unwrap();
    let err = analyze_csv("sampleId,N,P,K,pH\nS1,1,2,3,7\n", "tomato", &table).unwrap_err();
    assert!(matches!(err, SoilError::MissingField(ref f) if f == "Moisture"));
    assert_eq!(err.to_string(), "Missing required field: Moisture");
}

#[test]
fn non_numeric_value_is_invalid_format() {
    let table = default_thresholds().unwrap();
    let err = analyze_csv("sampleId,N,P,K,pH,Moisture\nS1,abc,2,3,7,20\n", "x", &table).unwrap_err();
    assert!(err.to_string().starts_with("Invalid data format"));
}

#[test]
fn header_only_file_is_empty() {
    let table = default_thresholds().unwrap();
    let err = analyze_csv("sampleId,N,P,K,pH,Moisture\n", "x", &table).unwrap_err();
    assert!(matches!(err, SoilError::EmptyInput));
}

// ---------------------------------------------------------------------------
// Knowledge lookup and session
// ---------------------------------------------------------------------------
#[test]
fn knowledge_lookup_for_nitrogen() {
    let kb = KnowledgeBase::builtin().unwrap();
    let ids: Vec<u32> = kb.search("nitrogen").map(|a| a.id).collect();
    assert!(ids.contains(&2));
    for id in &ids {
        let article = kb.get(*id).unwrap();
        let text = format!("{} {}", article.title, article.content).to_lowercase();
        let keyword_hit = article.keywords.iter().any(|k| "nitrogen".contains(k.as_str()));
        assert!(text.contains("nitrogen") || keyword_hit);
    }
}

#[test]
fn session_answers_from_loaded_csv() {
    let session = Session::new();
    session.login("grower").unwrap();
    session.load_record(soilgpt_core::parsing::parse_csv(DEPLETED).unwrap());
    let result = session
        .ask("How do I fix watering?", Duration::ZERO)
        .unwrap()
        .unwrap();
    assert_eq!(result.topic, Topic::Moisture);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn huge_readings_do_not_break_the_chart() {
    let table = default_thresholds().unwrap();
    let csv = "sampleId,N,P,K,pH,Moisture\n\
               S1,50000000000000000000000000000,50000000000000000000000000000,1,6.5,35\n";
    let analysis = analyze_csv(csv, "general", &table).unwrap();
    assert!(analysis.chart.slices.iter().all(|s| s.share_pct.is_zero()));
    assert_eq!(analysis.result.topic, Topic::General);
}
