//! Structure integration
//!
//! Injects common competitor headings into a draft outline as H3 entries.
//! Every heading goes to one target section (`comparison_points`, else the
//! first section) until its H3 cap is reached; overflow is dropped.

use tracing::debug;

use crate::config::OutlineConfig;
use crate::constants::outline::AGGREGATED_LEVEL;
use crate::types::{ArticleStructure, ContentRole, SerpProfile};

use super::aggregate::{CommonHeading, HeadingAggregator};
use super::normalize::HeaderNormalizer;

#[derive(Debug, Clone)]
pub struct StructureIntegrator {
    aggregator: HeadingAggregator,
    normalizer: HeaderNormalizer,
    max_h3_per_section: usize,
}

impl StructureIntegrator {
    pub fn new(
        aggregator: HeadingAggregator,
        normalizer: HeaderNormalizer,
        max_h3_per_section: usize,
    ) -> Self {
        Self {
            aggregator,
            normalizer,
            max_h3_per_section,
        }
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(
            HeadingAggregator::from_config(config),
            HeaderNormalizer::new(config.fold_latin_case),
            config.max_h3_per_section,
        )
    }

    /// Aggregate the profile's competitor H2s and inject the common ones
    pub fn integrate(&self, profile: &SerpProfile, structure: ArticleStructure) -> ArticleStructure {
        let common = self
            .aggregator
            .aggregate(&profile.competitors, AGGREGATED_LEVEL);
        self.inject(structure, &common)
    }

    /// Inject `common` (already frequency-sorted) into `structure`
    pub fn inject(&self, structure: ArticleStructure, common: &[CommonHeading]) -> ArticleStructure {
        let ArticleStructure {
            title,
            mut sections,
        } = structure;

        if sections.is_empty() || common.is_empty() {
            return ArticleStructure { title, sections };
        }

        let h2_keys: Vec<String> = sections
            .iter()
            .map(|s| self.normalizer.normalize(&s.h2))
            .filter(|k| !k.is_empty())
            .collect();

        let target = sections
            .iter()
            .position(|s| s.role == ContentRole::ComparisonPoints)
            .unwrap_or(0);

        let mut injected = 0usize;
        for heading in common {
            if h2_keys
                .iter()
                .any(|h2| h2.contains(heading.key.as_str()) || heading.key.contains(h2.as_str()))
            {
                debug!(heading = %heading.display, "Overlaps an existing H2, skipping");
                continue;
            }

            let section = &mut sections[target];
            if section.h3.len() >= self.max_h3_per_section {
                debug!(heading = %heading.display, section = %section.h2, "H3 cap reached, dropping");
                continue;
            }
            if section
                .h3
                .iter()
                .any(|h3| self.normalizer.normalize(h3) == heading.key)
            {
                continue;
            }

            section.h3.push(heading.display.clone());
            injected += 1;
        }

        debug!(
            injected,
            candidates = common.len(),
            section = %sections[target].role,
            "Integrated competitor headings"
        );

        ArticleStructure { title, sections }
    }
}

impl Default for StructureIntegrator {
    fn default() -> Self {
        Self::from_config(&OutlineConfig::default())
    }
}
