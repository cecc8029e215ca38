//! Weighted field-match scoring
//!
//! Per term and document, additively:
//!
//! | field       | contribution                                      |
//! |-------------|---------------------------------------------------|
//! | keywords    | `keywords × category`                              |
//! | title       | `title × category`                                 |
//! | description | `description × category`                           |
//! | content     | `min(occurrences, cap) × content_occurrence × category` |
//!
//! Documents scoring zero are dropped. Ranking is a stable sort by score, so
//! ties keep index order.

use std::sync::Arc;

use super::parsing::tokenize;
use super::snippets::build_snippet;
use crate::config::ScoringWeights;
use crate::search::types::{IndexedDocument, ScoredResult};
use crate::utils::fold_case;

/// Case-folded copies of the matchable fields
struct FoldedFields {
    keywords: String,
    title: String,
    description: String,
    content: String,
}

impl FoldedFields {
    fn new(document: &IndexedDocument) -> Self {
        Self {
            keywords: fold_case(&document.keywords),
            title: fold_case(&document.title),
            description: fold_case(&document.description),
            content: fold_case(&document.content),
        }
    }
}

fn term_score(fields: &FoldedFields, term: &str, weights: &ScoringWeights, category: f32) -> (f32, usize) {
    let mut score = 0.0;
    if fields.keywords.contains(term) {
        score += weights.keywords * category;
    }
    if fields.title.contains(term) {
        score += weights.title * category;
    }
    if fields.description.contains(term) {
        score += weights.description * category;
    }
    let occurrences = fields
        .content
        .matches(term)
        .take(weights.occurrence_cap)
        .count();
    score += occurrences as f32 * weights.content_occurrence * category;
    (score, occurrences)
}

/// Score one document against already-tokenized terms
#[must_use]
pub fn score_document(document: &IndexedDocument, terms: &[String], weights: &ScoringWeights) -> f32 {
    let fields = FoldedFields::new(document);
    terms
        .iter()
        .map(|term| term_score(&fields, term, weights, document.weight).0)
        .sum()
}

/// Score, filter and rank a snapshot of documents against a raw query
///
/// Read-only over `documents`; the same inputs always give the same output.
pub fn search_documents(
    documents: &[Arc<IndexedDocument>],
    query: &str,
    weights: &ScoringWeights,
    snippet_radius: usize,
) -> Vec<ScoredResult> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = documents
        .iter()
        .filter_map(|document| {
            let fields = FoldedFields::new(document);
            let mut score = 0.0;
            let mut context = None;
            for term in &terms {
                let (term_total, occurrences) = term_score(&fields, term, weights, document.weight);
                score += term_total;
                if occurrences > 0 && context.is_none() {
                    context = build_snippet(&document.content, term, snippet_radius);
                }
            }
            (score > 0.0).then(|| ScoredResult {
                document: Arc::clone(document),
                score,
                context,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentKind;

    fn doc(title: &str, content: &str, kind: ContentKind, weight: f32) -> Arc<IndexedDocument> {
        Arc::new(IndexedDocument {
            url: format!("/{title}.html"),
            title: title.to_string(),
            description: String::new(),
            keywords: String::new(),
            content: content.to_string(),
            kind,
            weight,
        })
    }

    #[test]
    fn field_order_is_keywords_title_description_content() {
        let w = ScoringWeights::default();
        let base = IndexedDocument {
            url: "/x.html".into(),
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            content: String::new(),
            kind: ContentKind::Page,
            weight: 1.0,
        };
        let terms = vec!["rust".to_string()];
        let kw = score_document(&IndexedDocument { keywords: "rust".into(), ..base.clone() }, &terms, &w);
        let title = score_document(&IndexedDocument { title: "Rust".into(), ..base.clone() }, &terms, &w);
        let desc = score_document(&IndexedDocument { description: "rust".into(), ..base.clone() }, &terms, &w);
        let body = score_document(&IndexedDocument { content: "rust".into(), ..base.clone() }, &terms, &w);
        assert!(kw > title && title > desc && desc > body && body > 0.0);
        assert_eq!(score_document(&base, &terms, &w), 0.0);
    }

    #[test]
    fn content_occurrences_are_capped() {
        let w = ScoringWeights { occurrence_cap: 3, ..ScoringWeights::default() };
        let terms = vec!["a".to_string()];
        let three = doc("t", "a a a", ContentKind::Page, 1.0);
        let many = doc("t", &"a ".repeat(100), ContentKind::Page, 1.0);
        assert_eq!(score_document(&three, &terms, &w), score_document(&many, &terms, &w));
    }

    #[test]
    fn category_weight_multiplies() {
        let w = ScoringWeights::default();
        let terms = vec!["rust".to_string()];
        let page = doc("rust", "", ContentKind::Page, 1.0);
        let article = doc("rust", "", ContentKind::Article, 1.5);
        assert!((score_document(&article, &terms, &w) - 1.5 * score_document(&page, &terms, &w)).abs() < 1e-4);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let docs = vec![doc("any", "content", ContentKind::Page, 1.0)];
        assert!(search_documents(&docs, "   ", &ScoringWeights::default(), 30).is_empty());
    }

    #[test]
    fn ties_keep_index_order() {
        let docs = vec![
            doc("first", "shared word", ContentKind::Page, 1.0),
            doc("second", "shared word", ContentKind::Page, 1.0),
            doc("third", "shared word", ContentKind::Page, 1.0),
        ];
        let results = search_documents(&docs, "shared", &ScoringWeights::default(), 30);
        let titles: Vec<&str> = results.iter().map(|r| r.document.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn first_matching_term_owns_the_snippet() {
        let docs = vec![doc("t", "alpha beta gamma", ContentKind::Page, 1.0)];
        let results = search_documents(&docs, "zzz beta alpha", &ScoringWeights::default(), 100);
        assert_eq!(results[0].context.as_deref(), Some("alpha <mark>beta</mark> gamma"));
    }
}
