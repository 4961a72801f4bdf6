use crate::error::SoilError;
use serde::{Deserialize, Serialize};

const KNOWLEDGE_BASE_JSON: &str = include_str!("../../../../data/knowledge-base.json");

/// A static reference article on soil or crops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub content: String,
    /// Lower-case trigger words.
    pub keywords: Vec<String>,
}

impl KnowledgeArticle {
    /// Query match used by the question answering side.
    ///
    /// Title and content must contain the query, but for keywords the
    /// direction flips: the query must contain the keyword. Single-letter
    /// keywords such as "n" therefore match many questions.
    pub fn matches(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.content.to_lowercase().contains(lower_query)
            || self.keywords.iter().any(|kw| lower_query.contains(kw.as_str()))
    }

    /// Title/content-only match used when browsing.
    fn mentions(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.content.to_lowercase().contains(lower_query)
    }
}

/// The fixed, read-only article set.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    articles: Vec<KnowledgeArticle>,
}

impl KnowledgeBase {
    /// Articles shipped with the crate, in source order.
    pub fn builtin() -> Result<KnowledgeBase, SoilError> {
        Self::from_json(KNOWLEDGE_BASE_JSON)
    }

    pub fn from_json(json: &str) -> Result<KnowledgeBase, SoilError> {
        let articles: Vec<KnowledgeArticle> = serde_json::from_str(json)?;
        Ok(Self::from_articles(articles))
    }

    pub fn from_articles(articles: Vec<KnowledgeArticle>) -> KnowledgeBase {
        KnowledgeBase { articles }
    }

    pub fn articles(&self) -> &[KnowledgeArticle] {
        &self.articles
    }

    pub fn get(&self, id: u32) -> Result<&KnowledgeArticle, SoilError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or(SoilError::UnknownArticle(id))
    }

    /// Articles matching a free-text query, in source order. An empty query
    /// matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a KnowledgeArticle> + 'a {
        let lower = query.to_lowercase();
        self.articles.iter().filter(move |a| a.matches(&lower))
    }

    /// Browse filter: optional title/content text and optional exact category.
    pub fn browse<'a>(
        &'a self,
        query: Option<&str>,
        category: Option<&'a str>,
    ) -> impl Iterator<Item = &'a KnowledgeArticle> + 'a {
        let lower = query
            .map(|q| q.to_lowercase())
            .filter(|q| !q.is_empty());
        self.articles.iter().filter(move |a| {
            let text_ok = lower.as_deref().map_or(true, |q| a.mentions(q));
            let category_ok = category.map_or(true, |c| a.category == c);
            text_ok && category_ok
        })
    }

    /// Unique categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for article in &self.articles {
            if !seen.contains(&article.category.as_str()) {
                seen.push(&article.category);
            }
        }
        seen
    }
}
