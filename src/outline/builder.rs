//! Role-based structure builder
//!
//! Turns a profile into a draft outline: title, one section per content role
//! in intent-driven order, and PAA questions under the FAQ section.

use tracing::debug;

use crate::config::OutlineConfig;
use crate::constants::outline::COMPARISON_CONTENT_TYPE;
use crate::types::{ArticleStructure, ContentRole, IntentStats, Section, SerpProfile};

#[derive(Debug, Clone)]
pub struct StructureBuilder {
    max_faq_questions: usize,
}

impl StructureBuilder {
    pub fn new(max_faq_questions: usize) -> Self {
        Self { max_faq_questions }
    }

    /// FAQ questions are H3s too, so the section cap bounds them
    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(config.max_faq_questions.min(config.max_h3_per_section))
    }

    pub fn build(&self, profile: &SerpProfile) -> ArticleStructure {
        let keyword = profile.keyword.as_str();

        let sections = section_order(&profile.intent_stats)
            .into_iter()
            .map(|role| {
                let section = Section::new(role, h2_text(role, keyword));
                match role {
                    ContentRole::Faq => section.with_h3(
                        profile
                            .questions()
                            .take(self.max_faq_questions)
                            .map(String::from)
                            .collect(),
                    ),
                    _ => section,
                }
            })
            .collect();

        ArticleStructure::new(title(profile), sections)
    }
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::from_config(&OutlineConfig::default())
    }
}

/// H1 for the article. Only comparison content gets a templated title
pub fn title(profile: &SerpProfile) -> String {
    if profile.is_content_type(COMPARISON_CONTENT_TYPE) {
        format!("{}比較・おすすめランキング15選【2026年最新】", profile.keyword)
    } else {
        profile.keyword.clone()
    }
}

/// Base role order, with `conclusion` pulled up to follow the introduction
/// when transactional intent outweighs informational intent
pub fn section_order(intent: &IntentStats) -> Vec<ContentRole> {
    let mut roles = ContentRole::ALL.to_vec();

    if intent.is_transactional() {
        debug!(
            transactional = intent.transactional,
            informational = intent.informational,
            "Transactional intent, moving conclusion forward"
        );
        roles.retain(|r| *r != ContentRole::Conclusion);
        roles.insert(1, ContentRole::Conclusion);
    }

    roles
}

/// H2 text for a role
pub fn h2_text(role: ContentRole, keyword: &str) -> String {
    match role {
        ContentRole::Introduction => format!("{}とは？選ぶ前に知っておきたい基礎知識", keyword),
        ContentRole::ComparisonPoints => format!("{}を選ぶときの比較ポイント", keyword),
        ContentRole::ComparisonTable => format!("{}の比較一覧表", keyword),
        ContentRole::ConditionalRecommendation => "目的・タイプ別のおすすめ".to_string(),
        ContentRole::Faq => "よくある質問".to_string(),
        ContentRole::Caution => "利用前に確認したい注意点".to_string(),
        ContentRole::Conclusion => "結論：迷ったらこれを選べば間違いない".to_string(),
        ContentRole::Summary => "まとめ".to_string(),
    }
}
