//! Grouping of ranked results by content type

use crate::config::ContentTypeTable;
use crate::search::types::{ResultGroup, ScoredResult};

/// Partition ranked results into per-type groups
///
/// Groups follow the table's display order; inside a group the score order
/// of `results` is kept. Types with no results are omitted. Every result lands
/// in exactly one group, so group sizes add up to `results.len()`.
pub fn group_results(results: Vec<ScoredResult>, table: &ContentTypeTable) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = table
        .iter()
        .map(|rule| ResultGroup {
            kind: rule.kind,
            label: rule.label.clone(),
            icon: rule.icon.clone(),
            results: Vec::new(),
        })
        .collect();

    for result in results {
        let key = table.rule(result.document.kind).kind;
        if let Some(group) = groups.iter_mut().find(|group| group.kind == key) {
            group.results.push(result);
        }
    }

    groups.retain(|group| !group.is_empty());
    groups
}
