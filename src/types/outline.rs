//! Article outline types
//!
//! [`ArticleStructure`] is the sole output of outline synthesis: an H1 title and
//! an ordered list of role-tagged sections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rhetorical purpose of an article section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentRole {
    Introduction,
    ComparisonPoints,
    ComparisonTable,
    ConditionalRecommendation,
    Faq,
    Caution,
    Conclusion,
    Summary,
}

impl ContentRole {
    /// Every role in base section order
    pub const ALL: [ContentRole; 8] = [
        ContentRole::Introduction,
        ContentRole::ComparisonPoints,
        ContentRole::ComparisonTable,
        ContentRole::ConditionalRecommendation,
        ContentRole::Faq,
        ContentRole::Caution,
        ContentRole::Conclusion,
        ContentRole::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRole::Introduction => "introduction",
            ContentRole::ComparisonPoints => "comparison_points",
            ContentRole::ComparisonTable => "comparison_table",
            ContentRole::ConditionalRecommendation => "conditional_recommendation",
            ContentRole::Faq => "faq",
            ContentRole::Caution => "caution",
            ContentRole::Conclusion => "conclusion",
            ContentRole::Summary => "summary",
        }
    }
}

impl fmt::Display for ContentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown content role: {}", s))
    }
}

/// One H2 section with its H3 sub-headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub h2: String,
    pub role: ContentRole,
    #[serde(default)]
    pub h3: Vec<String>,
}

impl Section {
    pub fn new(role: ContentRole, h2: impl Into<String>) -> Self {
        Self {
            h2: h2.into(),
            role,
            h3: Vec::new(),
        }
    }

    pub fn with_h3(mut self, h3: Vec<String>) -> Self {
        self.h3 = h3;
        self
    }
}

/// Finished article outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStructure {
    pub title: String,
    pub sections: Vec<Section>,
}

impl ArticleStructure {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn section(&self, role: ContentRole) -> Option<&Section> {
        self.sections.iter().find(|s| s.role == role)
    }

    pub fn position(&self, role: ContentRole) -> Option<usize> {
        self.sections.iter().position(|s| s.role == role)
    }

    pub fn roles(&self) -> Vec<ContentRole> {
        self.sections.iter().map(|s| s.role).collect()
    }

    pub fn h3_count(&self) -> usize {
        self.sections.iter().map(|s| s.h3.len()).sum()
    }

    /// Markdown skeleton: `#` title, `##` sections, `###` sub-headings
    pub fn to_markdown(&self) -> String {
        let mut content = String::new();
        content.push_str(&format!("# {}\n", self.title));

        for section in &self.sections {
            content.push_str(&format!("\n## {}\n", section.h2));
            for h3 in &section.h3 {
                content.push_str(&format!("\n### {}\n", h3));
            }
        }

        content
    }
}

/// One unit of content to be written, in section order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStep {
    /// Zero-based section index
    pub index: usize,
    pub h2: String,
    pub role: ContentRole,
    /// Placeholder body until a real writer replaces it
    pub content: String,
    /// Share of the profile's target word count allotted to this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_words: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in ContentRole::ALL {
            assert_eq!(role.as_str().parse::<ContentRole>(), Ok(role));
        }
        assert!("hero".parse::<ContentRole>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&ContentRole::ConditionalRecommendation).unwrap();
        assert_eq!(json, "\"conditional_recommendation\"");
    }

    #[test]
    fn test_to_markdown() {
        let structure = ArticleStructure::new(
            "SEO",
            vec![
                Section::new(ContentRole::Introduction, "SEOとは")
                    .with_h3(vec!["基本".into(), "歴史".into()]),
                Section::new(ContentRole::Summary, "まとめ"),
            ],
        );

        assert_eq!(
            structure.to_markdown(),
            "# SEO\n\n## SEOとは\n\n### 基本\n\n### 歴史\n\n## まとめ\n"
        );
        assert_eq!(structure.h3_count(), 2);
        assert_eq!(structure.position(ContentRole::Summary), Some(1));
    }
}
