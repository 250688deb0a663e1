//! Aggregator/Reporter
//!
//! Groups scanned badges by resolved category and derives the run
//! summary. Grouping preserves document scan order; categories that end
//! up empty are dropped from the reports (their zero counts survive in
//! the summary when the policy has a closed category set).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::CategoryResolver;
use crate::record::{BadgeRecord, ScannedBadge};

/// Persisted per-category report
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    /// Grouping key; drives the output filename, not part of the JSON
    #[serde(skip)]
    pub category_key: String,

    pub category_name: String,
    pub badges_count: usize,
    pub badges: Vec<BadgeRecord>,
}

/// Persisted run summary
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_categories: usize,
    pub total_badges: usize,
    /// Display name to badge count; pre-seeded with zeroes for every
    /// category under the fixed-taxonomy policy
    pub categories: BTreeMap<String, usize>,
    /// Distinct source documents, sorted
    pub files_processed: Vec<String>,
    /// Distinct technology names, sorted
    pub unique_technologies: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Group scanned badges into per-category reports plus a summary.
///
/// Report order is first-seen document order, except under a closed
/// category set (fixed taxonomy) where declaration order wins. The
/// resolver supplies display names and the seed set; it is not consulted
/// about individual badges again.
pub fn aggregate(hits: &[ScannedBadge], resolver: &CategoryResolver) -> (Vec<CategoryReport>, Summary) {
    let mut order: Vec<String> = resolver.seed_categories().unwrap_or_default();
    let mut grouped: BTreeMap<String, Vec<BadgeRecord>> = BTreeMap::new();

    for key in &order {
        grouped.insert(key.clone(), Vec::new());
    }

    for hit in hits {
        if !grouped.contains_key(&hit.category) {
            order.push(hit.category.clone());
            grouped.insert(hit.category.clone(), Vec::new());
        }
        if let Some(records) = grouped.get_mut(&hit.category) {
            records.push(hit.record.clone());
        }
    }

    let mut categories = BTreeMap::new();
    if resolver.seed_categories().is_some() {
        for key in &order {
            categories.insert(resolver.display_name(key), 0);
        }
    }

    let mut reports = Vec::new();
    for key in &order {
        let records = grouped.remove(key).unwrap_or_default();
        if records.is_empty() {
            continue;
        }
        let display = resolver.display_name(key);
        categories.insert(display.clone(), records.len());
        reports.push(CategoryReport {
            category_key: key.clone(),
            category_name: display,
            badges_count: records.len(),
            badges: records,
        });
    }

    let files_processed: BTreeSet<String> = hits
        .iter()
        .filter_map(|hit| hit.record.source_file.clone())
        .collect();
    let unique_technologies: BTreeSet<String> =
        hits.iter().map(|hit| hit.record.technology.clone()).collect();

    let summary = Summary {
        total_categories: reports.len(),
        total_badges: hits.len(),
        categories,
        files_processed: files_processed.into_iter().collect(),
        unique_technologies: unique_technologies.into_iter().collect(),
        generated_at: Utc::now(),
    };

    (reports, summary)
}
