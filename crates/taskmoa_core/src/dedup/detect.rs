//! Duplicate detection and autocomplete suggestion over a task corpus.
//!
//! # Responsibility
//! - Score an input title against repository candidates.
//! - Partition same-category candidates into score tiers and rank them.
//! - Produce capped autocomplete suggestion lists across all categories.
//!
//! # Invariants
//! - Every returned list is sorted non-increasing by overall score; ties
//!   keep corpus iteration order (stable sort).
//! - A candidate appears in at most one tier of a report.
//! - Repository failures propagate unchanged; no retry, no partial results.

use crate::model::task::{CategoryId, TaskRecord};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::similarity::score::{similarity, SimilarityScore};
use crate::text::normalize::normalize_title;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

/// Same-category score at or above which a candidate is an exact duplicate.
pub const EXACT_DUPLICATE_THRESHOLD: f64 = 0.9;
/// Same-category score at or above which a candidate is merely similar.
pub const SIMILAR_THRESHOLD: f64 = 0.7;
/// Minimum penalized score for a cross-category suggestion.
pub const CROSS_CATEGORY_THRESHOLD: f64 = 0.6;
/// Multiplicative discount applied to cross-category scores.
pub const CROSS_CATEGORY_PENALTY: f64 = 0.8;
/// Minimum score for an autocomplete suggestion.
pub const AUTOCOMPLETE_THRESHOLD: f64 = 0.3;
/// Autocomplete result cap when the caller does not supply one.
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 5;

/// A candidate task paired with its similarity verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    pub task: TaskRecord,
    pub score: SimilarityScore,
}

/// Tiered result of a duplicate check for one input title.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateReport {
    /// Same category, score >= 0.9.
    pub exact_duplicates: Vec<ScoredTask>,
    /// Same category, 0.7 <= score < 0.9.
    pub similar_tasks: Vec<ScoredTask>,
    /// Other categories, penalized score >= 0.6.
    pub suggestions: Vec<ScoredTask>,
}

impl DuplicateReport {
    /// Whether no candidate reached any tier.
    pub fn is_empty(&self) -> bool {
        self.exact_duplicates.is_empty()
            && self.similar_tasks.is_empty()
            && self.suggestions.is_empty()
    }
}

/// Checks `input_title` against the corpus and partitions candidates into
/// score tiers.
///
/// The input is normalized once; candidates are compared through their
/// stored `normalized_title`. Same-category candidates land in
/// `exact_duplicates` or `similar_tasks`; candidates from other categories
/// are discounted by the cross-category penalty and land in `suggestions`.
/// An empty input title yields an empty report, which is a valid result.
///
/// # Errors
/// Repository failures are returned unchanged.
pub fn detect_duplicates(
    repo: &impl TaskRepository,
    input_title: &str,
    input_category: CategoryId,
) -> RepoResult<DuplicateReport> {
    let normalized_input = normalize_title(input_title);

    let same_category = repo.find_by_category(input_category)?;
    let all_tasks = repo.find_all()?;
    // find_all already includes the same-category rows, so the full fetch is
    // the distinct candidate count.
    let same_category_count = same_category.len();
    let candidate_count = all_tasks.len();

    let mut report = DuplicateReport::default();

    for task in same_category {
        let score = similarity(&normalized_input, &task.normalized_title);
        if score.overall >= EXACT_DUPLICATE_THRESHOLD {
            report.exact_duplicates.push(ScoredTask { task, score });
        } else if score.overall >= SIMILAR_THRESHOLD {
            report.similar_tasks.push(ScoredTask { task, score });
        }
    }

    for task in all_tasks {
        // Same-category candidates were already tiered above.
        if task.category == input_category {
            continue;
        }

        let score =
            similarity(&normalized_input, &task.normalized_title).penalized(CROSS_CATEGORY_PENALTY);
        if score.overall >= CROSS_CATEGORY_THRESHOLD {
            report.suggestions.push(ScoredTask { task, score });
        }
    }

    sort_by_score_desc(&mut report.exact_duplicates);
    sort_by_score_desc(&mut report.similar_tasks);
    sort_by_score_desc(&mut report.suggestions);

    debug!(
        "event=duplicate_check module=dedup status=ok candidates={} same_category={} exact={} similar={} suggestions={}",
        candidate_count,
        same_category_count,
        report.exact_duplicates.len(),
        report.similar_tasks.len(),
        report.suggestions.len()
    );

    Ok(report)
}

/// Ranks autocomplete suggestions for a partial input across the whole
/// corpus, ignoring categories.
///
/// Keeps candidates scoring at least 0.3, sorted descending and truncated to
/// `limit` (default 5). A limit of zero yields an empty list without
/// touching the repository.
///
/// # Errors
/// Repository failures are returned unchanged.
pub fn generate_suggestions(
    repo: &impl TaskRepository,
    input_text: &str,
    limit: Option<u32>,
) -> RepoResult<Vec<ScoredTask>> {
    let limit = limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    if limit == 0 {
        return Ok(Vec::new());
    }

    let normalized_input = normalize_title(input_text);

    let mut suggestions: Vec<ScoredTask> = repo
        .find_all()?
        .into_iter()
        .map(|task| {
            let score = similarity(&normalized_input, &task.normalized_title);
            ScoredTask { task, score }
        })
        .filter(|scored| scored.score.overall >= AUTOCOMPLETE_THRESHOLD)
        .collect();

    sort_by_score_desc(&mut suggestions);
    suggestions.truncate(limit as usize);

    debug!(
        "event=suggest module=dedup status=ok returned={} limit={}",
        suggestions.len(),
        limit
    );

    Ok(suggestions)
}

/// Stable descending sort by overall score; ties keep corpus order.
fn sort_by_score_desc(entries: &mut [ScoredTask]) {
    entries.sort_by(|a, b| {
        b.score
            .overall
            .partial_cmp(&a.score.overall)
            .unwrap_or(Ordering::Equal)
    });
}
