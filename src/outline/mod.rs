//! Outline synthesis pipeline
//!
//! Composes the two stages in fixed order:
//!
//! 1. [`StructureBuilder`]: title, role-ordered sections, FAQ questions
//! 2. [`StructureIntegrator`]: common competitor H2s injected as H3s
//!
//! Integration needs the finished H2 titles for duplicate suppression, so
//! the builder always runs first. Both stages are pure.

pub mod aggregate;
pub mod builder;
pub mod integrate;
pub mod normalize;

pub use aggregate::{CommonHeading, HeadingAggregator};
pub use builder::{StructureBuilder, h2_text, section_order, title};
pub use integrate::StructureIntegrator;
pub use normalize::{HeaderNormalizer, display_heading, normalize_heading};

use tracing::info;

use crate::config::OutlineConfig;
use crate::types::{ArticleStructure, SerpProfile};

/// Configured outline pipeline
#[derive(Debug, Clone, Default)]
pub struct OutlinePipeline {
    builder: StructureBuilder,
    integrator: StructureIntegrator,
}

impl OutlinePipeline {
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            builder: StructureBuilder::from_config(config),
            integrator: StructureIntegrator::from_config(config),
        }
    }

    pub fn synthesize(&self, profile: &SerpProfile) -> ArticleStructure {
        let draft = self.builder.build(profile);
        let structure = self.integrator.integrate(profile, draft);

        info!(
            keyword = %profile.keyword,
            competitors = profile.competitors.len(),
            sections = structure.sections.len(),
            h3 = structure.h3_count(),
            "Synthesized outline"
        );

        structure
    }
}

/// Synthesize an outline with default settings
pub fn synthesize_structure(profile: &SerpProfile) -> ArticleStructure {
    OutlinePipeline::default().synthesize(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Competitor, ContentRole, IntentStats};
    use std::collections::HashSet;

    fn fx_profile() -> SerpProfile {
        (1..=5).fold(
            SerpProfile::new("FXおすすめ", IntentStats::new(0.4, 0.6)).with_content_type("comparison"),
            |p, rank| {
                p.with_competitor(
                    Competitor::new(rank)
                        .with_heading("h2", "手数料を比較する")
                        .with_heading("h2", format!("独自の見出し{}", rank)),
                )
            },
        )
    }

    #[test]
    fn test_fx_comparison_scenario() {
        let structure = synthesize_structure(&fx_profile());

        assert!(structure.title.contains("比較・おすすめランキング15選"));
        assert_eq!(structure.position(ContentRole::Conclusion), Some(1));

        let points = structure.section(ContentRole::ComparisonPoints).unwrap();
        assert_eq!(points.h3, vec!["手数料を比較する"]);
    }

    #[test]
    fn test_zero_competitors_still_builds_all_roles() {
        let profile = SerpProfile::new("SEOとは", IntentStats::new(0.8, 0.2))
            .with_question("SEOは無料でできる？");
        let structure = synthesize_structure(&profile);

        let roles: HashSet<_> = structure.roles().into_iter().collect();
        assert_eq!(roles.len(), 8);
        assert_eq!(structure.h3_count(), 1);
        assert_eq!(
            structure.section(ContentRole::Faq).unwrap().h3,
            vec!["SEOは無料でできる？"]
        );
    }

    #[test]
    fn test_h3_cap_holds_across_sections() {
        let mut profile = SerpProfile::new("FX", IntentStats::new(0.5, 0.5));
        for rank in 1..=3 {
            let mut competitor = Competitor::new(rank);
            for name in ["口座開設", "スプレッド", "取引ツール", "キャンペーン", "サポート", "スワップ", "入出金"] {
                competitor = competitor.with_heading("h2", name);
            }
            profile = profile.with_competitor(competitor);
        }

        let structure = synthesize_structure(&profile);
        assert!(structure.sections.iter().all(|s| s.h3.len() <= 5));
        assert_eq!(
            structure.section(ContentRole::ComparisonPoints).unwrap().h3.len(),
            5
        );
    }

    #[test]
    fn test_configured_pipeline_respects_caps() {
        let config = OutlineConfig {
            max_h3_per_section: 1,
            max_faq_questions: 1,
            ..OutlineConfig::default()
        };
        let profile = fx_profile()
            .with_question("Q1")
            .with_question("Q2")
            .with_competitor(Competitor::new(6).with_heading("h2", "スプレッド"))
            .with_competitor(Competitor::new(7).with_heading("h2", "スプレッド"))
            .with_competitor(Competitor::new(8).with_heading("h2", "スプレッド"));

        let structure = OutlinePipeline::new(&config).synthesize(&profile);
        assert_eq!(structure.section(ContentRole::Faq).unwrap().h3, vec!["Q1"]);
        assert_eq!(
            structure.section(ContentRole::ComparisonPoints).unwrap().h3,
            vec!["手数料を比較する"]
        );
    }

    #[test]
    fn test_every_section_within_h3_cap() {
        let config = OutlineConfig {
            max_h3_per_section: 2,
            max_faq_questions: 4,
            ..OutlineConfig::default()
        };
        let profile = (1..=4).fold(fx_profile(), |p, i| p.with_question(format!("Q{}", i)));

        let structure = OutlinePipeline::new(&config).synthesize(&profile);
        assert_eq!(structure.section(ContentRole::Faq).unwrap().h3, vec!["Q1", "Q2"]);
        assert!(structure.sections.iter().all(|s| s.h3.len() <= 2));
    }

    #[test]
    fn test_demo_profile() {
        let profile =
            SerpProfile::from_json_str(include_str!("../../demos/fx-comparison.json")).unwrap();
        let structure = synthesize_structure(&profile);

        assert_eq!(structure.title, "FXおすすめ比較・おすすめランキング15選【2026年最新】");
        assert_eq!(structure.position(ContentRole::Conclusion), Some(1));
        assert_eq!(
            structure.section(ContentRole::Faq).unwrap().h3,
            vec![
                "FXは少額から始められる？",
                "FX口座はいくつ作るべき？",
                "FXの税金はどうなる？"
            ]
        );

        // 3 competitors: every heading clears 0.9, "よくある質問" collides with the FAQ H2,
        // and the cap drops the last candidate
        let points = &structure.section(ContentRole::ComparisonPoints).unwrap().h3;
        assert_eq!(
            points,
            &vec![
                "手数料を比較する",
                "取引ツールの使いやすさ",
                "2026年FX口座おすすめランキング",
                "口座開設の流れ",
                "注意口座開設の流れ",
            ]
        );
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let profile = fx_profile();
        assert_eq!(synthesize_structure(&profile), synthesize_structure(&profile));
    }
}
