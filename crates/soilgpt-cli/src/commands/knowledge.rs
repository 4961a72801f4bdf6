use soilgpt_core::error::SoilError;
use soilgpt_core::knowledge::{KnowledgeArticle, KnowledgeBase};

use crate::output;

pub fn search(query: &str, output_format: &str) -> Result<(), SoilError> {
    let kb = KnowledgeBase::builtin()?;
    let found: Vec<&KnowledgeArticle> = kb.search(query).collect();

    match output_format {
        "json" => output::json::print(&found)?,
        _ => {
            if found.is_empty() {
                println!("No articles found matching '{query}'.");
            } else {
                output::table::print_articles(&found);
            }
        }
    }
    Ok(())
}

pub fn list(query: Option<&str>, category: Option<&str>) -> Result<(), SoilError> {
    let kb = KnowledgeBase::builtin()?;
    let found: Vec<&KnowledgeArticle> = kb.browse(query, category).collect();

    if found.is_empty() {
        println!("No articles found matching your search criteria.");
    } else {
        output::table::print_articles(&found);
    }
    Ok(())
}

pub fn categories() -> Result<(), SoilError> {
    let kb = KnowledgeBase::builtin()?;
    for category in kb.categories() {
        let count = kb.browse(None, Some(category)).count();
        println!("  {category:<18} {count} article(s)");
    }
    Ok(())
}

pub fn show(id: u32) -> Result<(), SoilError> {
    let kb = KnowledgeBase::builtin()?;
    let article = kb.get(id)?;
    output::table::print_article(article);
    Ok(())
}
