use soilgpt_core::classify::{NutrientChart, RecordClassification, Tier};
use soilgpt_core::integrations::{ChatReply, Ticket};
use soilgpt_core::knowledge::KnowledgeArticle;
use soilgpt_core::report::QueryResult;
use soilgpt_core::session::HistoryEntry;

fn tier_marker(tier: Tier) -> &'static str {
    match tier {
        Tier::Error => "!!",
        Tier::Warning => "! ",
        Tier::Success => "ok",
        Tier::Neutral => "  ",
    }
}

pub fn print_classification(classification: &RecordClassification, chart: &NutrientChart) {
    println!("=== Sample {} ===\n", classification.sample_id);

    let label = |s: &soilgpt_core::classify::ParameterStatus| {
        s.parameter
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| s.name.clone())
    };
    let max_name = classification
        .statuses
        .iter()
        .map(|s| label(s).len())
        .max()
        .unwrap_or(10);

    for status in &classification.statuses {
        println!(
            "  {} {:<width$}  {:<10}  {}",
            tier_marker(status.tier),
            label(status),
            status.display,
            status.tier,
            width = max_name
        );
    }
    println!();

    println!("  NPK proportions:");
    for slice in &chart.slices {
        println!(
            "    {:<16} {:>8}  {:>5}%",
            slice.label,
            slice.value.to_string(),
            slice.share_pct.to_string()
        );
    }
    println!();
}

pub fn print_report(result: &QueryResult) {
    println!("{}", result.report_text);
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No questions asked yet.");
        return;
    }
    for entry in entries {
        println!(
            "  {}  [{}] {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.result.topic,
            entry.question
        );
    }
}

pub fn print_articles(articles: &[&KnowledgeArticle]) {
    for article in articles {
        println!("  {:>3}  {:<52} {}", article.id, article.title, article.category);
    }
}

pub fn print_article(article: &KnowledgeArticle) {
    println!("{} [{}]\n", article.title, article.category);
    println!("{}\n", article.content);
    println!("Keywords: {}", article.keywords.join(", "));
}

/// Prints the reply without the echoed command, which the terminal already shows.
pub fn print_chat_reply(reply: &ChatReply) {
    for line in reply.lines().iter().skip(1) {
        println!("{line}\n");
    }
}

pub fn print_tickets(tickets: &[Ticket]) {
    if tickets.is_empty() {
        println!("No tickets created yet.");
        return;
    }
    let max_title = tickets.iter().map(|t| t.title.len()).max().unwrap_or(10);
    for ticket in tickets {
        println!(
            "  {:<8}  {:<width$}  {:<11}  {}",
            ticket.id,
            ticket.title,
            ticket.status.to_string(),
            ticket.created.format("%Y-%m-%d"),
            width = max_title
        );
    }
}
