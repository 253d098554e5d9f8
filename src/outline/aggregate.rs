//! Competitor heading aggregation
//!
//! Counts how many competitors use each normalized heading at a given level
//! and keeps the ones that clear the coverage threshold.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OutlineConfig;
use crate::types::Competitor;

use super::normalize::{HeaderNormalizer, display_heading};

/// Absorbs float error in `ratio × competitors` (0.3 × 10 must admit 3)
const THRESHOLD_EPSILON: f64 = 1e-9;

/// A heading used by enough competitors to count as common
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonHeading {
    /// Normalized grouping key
    pub key: String,
    /// First-seen form of the heading, used when injecting it as an H3
    pub display: String,
    /// Number of competitors using the heading
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct HeadingAggregator {
    normalizer: HeaderNormalizer,
    ratio: f64,
    min_chars: usize,
}

impl HeadingAggregator {
    pub fn new(normalizer: HeaderNormalizer, ratio: f64, min_chars: usize) -> Self {
        Self {
            normalizer,
            ratio,
            min_chars,
        }
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(
            HeaderNormalizer::new(config.fold_latin_case),
            config.common_heading_ratio,
            config.min_heading_chars,
        )
    }

    /// Minimum count a heading needs across `competitors` competitors
    pub fn threshold(&self, competitors: usize) -> f64 {
        self.ratio * competitors as f64
    }

    /// Common headings at `level`, most frequent first.
    ///
    /// Each competitor contributes at most once per key. Ties keep the order
    /// in which keys were first seen. With no competitors there is nothing to
    /// be common with, so the result is empty.
    pub fn aggregate(&self, competitors: &[Competitor], level: &str) -> Vec<CommonHeading> {
        if competitors.is_empty() {
            debug!("No competitors, skipping heading aggregation");
            return Vec::new();
        }

        let mut entries: Vec<CommonHeading> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for competitor in competitors {
            let mut seen = HashSet::new();

            for text in competitor.headings_at(level) {
                let key = self.normalizer.normalize(text);
                if key.chars().count() < self.min_chars || !seen.insert(key.clone()) {
                    continue;
                }

                match index.get(&key) {
                    Some(&i) => entries[i].count += 1,
                    None => {
                        index.insert(key.clone(), entries.len());
                        entries.push(CommonHeading {
                            key,
                            display: display_heading(text),
                            count: 1,
                        });
                    }
                }
            }
        }

        let threshold = self.threshold(competitors.len());
        let distinct = entries.len();
        entries.retain(|e| e.count as f64 + THRESHOLD_EPSILON >= threshold);
        // stable: equal counts stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        debug!(
            competitors = competitors.len(),
            distinct,
            common = entries.len(),
            threshold,
            "Aggregated {} headings",
            level
        );

        entries
    }
}

impl Default for HeadingAggregator {
    fn default() -> Self {
        Self::from_config(&OutlineConfig::default())
    }
}
