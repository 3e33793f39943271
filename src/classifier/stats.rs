//! Summary statistics over a classified batch.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::record::ClassifiedRecord;

/// Coverage and per-label counts for a batch of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationStats {
    /// Records processed.
    pub total_companies: usize,
    /// Records with at least one label.
    pub labeled_companies: usize,
    /// `labeled_companies / total_companies` as a percentage.
    pub coverage_rate: f64,
    /// (label, count), highest count first; ties keep first-seen order.
    pub label_counts: Vec<(String, usize)>,
}

impl ClassificationStats {
    /// Compute statistics for a batch.
    pub fn from_results(results: &[ClassifiedRecord]) -> Self {
        let mut positions: AHashMap<&str, usize> = AHashMap::new();
        let mut label_counts: Vec<(String, usize)> = Vec::new();
        let mut labeled_companies = 0;

        for result in results {
            if result.insurance_labels.is_empty() {
                continue;
            }
            labeled_companies += 1;
            for label in &result.insurance_labels {
                match positions.get(label.as_str()) {
                    Some(&position) => label_counts[position].1 += 1,
                    None => {
                        positions.insert(label.as_str(), label_counts.len());
                        label_counts.push((label.clone(), 1));
                    }
                }
            }
        }

        label_counts.sort_by(|a, b| b.1.cmp(&a.1));

        let total_companies = results.len();
        ClassificationStats {
            total_companies,
            labeled_companies,
            coverage_rate: Self::percentage(labeled_companies, total_companies),
            label_counts,
        }
    }

    /// Share of all records carrying `count` labels, as a percentage.
    pub fn label_share(&self, count: usize) -> f64 {
        Self::percentage(count, self.total_companies)
    }

    fn percentage(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    }
}
