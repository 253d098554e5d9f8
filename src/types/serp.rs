//! SERP profile input types
//!
//! The profile is produced by an external SERP-data provider. Parsing goes
//! through [`SerpProfile::from_json_value`], which checks the shape the
//! outline pipeline relies on before handing back a typed value.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::profile::{INFORMATIONAL, TRANSACTIONAL};
use crate::types::{Result, ValidationError, ValidationErrorKind};

// =============================================================================
// Profile
// =============================================================================

/// Summary of search-result signals for one target keyword
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpProfile {
    pub keyword: String,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub engine: Option<String>,

    pub intent_stats: IntentStats,

    /// Dominant content type among ranking pages (e.g. "comparison")
    #[serde(default)]
    pub top_content_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type_distribution: BTreeMap<String, f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub target_word_count: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub competitors: Vec<Competitor>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ideas: Ideas,
}

/// Share of each search intent. `informational` and `transactional` are required
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentStats {
    pub informational: f64,
    pub transactional: f64,
    /// Any other intents reported by the provider (navigational, commercial, ...)
    #[serde(flatten)]
    pub other: BTreeMap<String, f64>,
}

impl IntentStats {
    pub fn new(informational: f64, transactional: f64) -> Self {
        Self {
            informational,
            transactional,
            other: BTreeMap::new(),
        }
    }

    pub fn is_transactional(&self) -> bool {
        self.transactional > self.informational
    }
}

/// One ranking competitor page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    /// 1 = top result
    pub rank: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub word_count: u32,
    /// Headings in page order
    #[serde(default, deserialize_with = "null_as_default")]
    pub headings: Vec<Heading>,
}

impl Competitor {
    pub fn new(rank: u32) -> Self {
        Self {
            rank,
            url: String::new(),
            title: String::new(),
            word_count: 0,
            headings: Vec::new(),
        }
    }

    pub fn with_heading(mut self, level: impl Into<String>, text: impl Into<String>) -> Self {
        self.headings.push(Heading::new(level, text));
        self
    }

    /// Headings at `level` (case-insensitive, e.g. "h2")
    pub fn headings_at<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headings
            .iter()
            .filter(move |h| h.level.eq_ignore_ascii_case(level))
            .map(|h| h.text.as_str())
    }
}

/// A (level, text) heading pair.
///
/// Accepts `["h2", "text"]` or `{"level": "h2", "text": "text"}` on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHeading")]
pub struct Heading {
    pub level: String,
    pub text: String,
}

impl Heading {
    pub fn new(level: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeading {
    Pair(String, String),
    Object { level: String, text: String },
}

impl From<RawHeading> for Heading {
    fn from(raw: RawHeading) -> Self {
        match raw {
            RawHeading::Pair(level, text) | RawHeading::Object { level, text } => {
                Heading { level, text }
            }
        }
    }
}

/// Content ideas collected from the SERP
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ideas {
    #[serde(default, deserialize_with = "null_as_default")]
    pub people_also_ask: Vec<Question>,
}

/// A "people also ask" entry. Accepts a bare string or `{"question": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    pub question: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuestion {
    Text(String),
    Entry { question: String },
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        match raw {
            RawQuestion::Text(question) | RawQuestion::Entry { question } => Question { question },
        }
    }
}

// =============================================================================
// Construction & Validation
// =============================================================================

impl SerpProfile {
    /// Minimal profile for a keyword; everything else empty
    pub fn new(keyword: impl Into<String>, intent_stats: IntentStats) -> Self {
        Self {
            keyword: keyword.into(),
            language: None,
            engine: None,
            intent_stats,
            top_content_type: None,
            content_type_distribution: BTreeMap::new(),
            target_word_count: 0,
            competitors: Vec::new(),
            ideas: Ideas::default(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.top_content_type = Some(content_type.into());
        self
    }

    pub fn with_competitor(mut self, competitor: Competitor) -> Self {
        self.competitors.push(competitor);
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.ideas.people_also_ask.push(Question {
            question: question.into(),
        });
        self
    }

    pub fn with_target_word_count(mut self, words: u32) -> Self {
        self.target_word_count = words;
        self
    }

    /// Parse and validate a profile from JSON text
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Parse and validate a profile from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded profile from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Validate the raw shape, then deserialize.
    ///
    /// Shape checks run on the raw value so that missing required fields are
    /// reported by name instead of as a generic serde message.
    pub fn from_json_value(value: Value) -> Result<Self> {
        check_shape(&value)?;

        let profile: SerpProfile = serde_json::from_value(value).map_err(|e| {
            ValidationError::new(ValidationErrorKind::Schema, e.to_string())
                .with_field("profile")
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Semantic checks on an already typed profile
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::Format,
                "keyword must not be empty",
            )
            .with_field("keyword")
            .into());
        }

        for (field, share) in [
            (INFORMATIONAL, self.intent_stats.informational),
            (TRANSACTIONAL, self.intent_stats.transactional),
        ] {
            if !share.is_finite() || share < 0.0 {
                return Err(ValidationError::new(
                    ValidationErrorKind::Range,
                    "intent share must be a finite non-negative number",
                )
                .with_field(format!("intent_stats.{}", field))
                .with_comparison(">= 0", share.to_string())
                .into());
            }
        }

        for (i, competitor) in self.competitors.iter().enumerate() {
            if competitor.rank == 0 {
                return Err(ValidationError::new(
                    ValidationErrorKind::Range,
                    "competitor rank must be positive",
                )
                .with_field(format!("competitors[{}].rank", i))
                .with_comparison(">= 1", "0")
                .into());
            }
        }

        Ok(())
    }

    /// PAA question texts in input order
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.ideas
            .people_also_ask
            .iter()
            .map(|q| q.question.as_str())
    }

    pub fn is_content_type(&self, content_type: &str) -> bool {
        self.top_content_type.as_deref() == Some(content_type)
    }
}

fn check_shape(value: &Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Err(ValidationError::new(
            ValidationErrorKind::Schema,
            "profile must be a JSON object",
        )
        .with_comparison("object", json_kind(value))
        .into());
    };

    match obj.get("keyword") {
        None | Some(Value::Null) => return Err(ValidationError::missing("keyword").into()),
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(
                ValidationError::new(ValidationErrorKind::Format, "keyword must be a string")
                    .with_field("keyword")
                    .with_comparison("string", json_kind(other))
                    .into(),
            );
        }
    }

    let Some(stats) = obj.get("intent_stats") else {
        return Err(ValidationError::missing("intent_stats").into());
    };
    let Some(stats) = stats.as_object() else {
        return Err(ValidationError::new(
            ValidationErrorKind::Format,
            "intent_stats must be an object",
        )
        .with_field("intent_stats")
        .with_comparison("object", json_kind(stats))
        .into());
    };
    for key in [INFORMATIONAL, TRANSACTIONAL] {
        let field = format!("intent_stats.{}", key);
        match stats.get(key) {
            None => return Err(ValidationError::missing(field).into()),
            Some(v) if !v.is_number() => {
                return Err(ValidationError::new(
                    ValidationErrorKind::Format,
                    "intent share must be a number",
                )
                .with_field(field)
                .with_comparison("number", json_kind(v))
                .into());
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Providers send `null` for fields they have no data for
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BriefError;
    use serde_json::json;

    fn validation_kind(err: BriefError) -> (ValidationErrorKind, Option<String>) {
        match err {
            BriefError::Validation(v) => (v.kind, v.field),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_full_profile() {
        let profile = SerpProfile::from_json_value(json!({
            "keyword": "FXおすすめ",
            "language": "ja",
            "engine": "google",
            "intent_stats": { "informational": 0.4, "transactional": 0.6, "navigational": 0.1 },
            "top_content_type": "comparison",
            "content_type_distribution": { "comparison": 0.7, "guide": 0.3 },
            "target_word_count": 8000,
            "competitors": [{
                "rank": 1,
                "url": "https://example.com/fx",
                "title": "FX比較",
                "word_count": 12000,
                "headings": [["h2", "手数料を比較する"], { "level": "h3", "text": "スプレッド" }]
            }],
            "ideas": { "people_also_ask": ["FXは儲かる？", { "question": "FXの始め方は？", "answer": "..." }] }
        }))
        .unwrap();

        assert_eq!(profile.keyword, "FXおすすめ");
        assert_eq!(profile.intent_stats.other.get("navigational"), Some(&0.1));
        assert!(profile.intent_stats.is_transactional());
        assert!(profile.is_content_type("comparison"));
        assert_eq!(profile.competitors[0].headings.len(), 2);
        assert_eq!(profile.competitors[0].headings[1], Heading::new("h3", "スプレッド"));
        assert_eq!(
            profile.questions().collect::<Vec<_>>(),
            vec!["FXは儲かる？", "FXの始め方は？"]
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let profile = SerpProfile::from_json_str(
            r#"{"keyword": "SEO", "intent_stats": {"informational": 1, "transactional": 0}}"#,
        )
        .unwrap();

        assert!(profile.competitors.is_empty());
        assert!(profile.ideas.people_also_ask.is_empty());
        assert_eq!(profile.top_content_type, None);
        assert_eq!(profile.target_word_count, 0);
    }

    #[test]
    fn test_null_optional_fields_default() {
        let profile = SerpProfile::from_json_value(json!({
            "keyword": "SEO",
            "language": null,
            "intent_stats": { "informational": 0.6, "transactional": 0.4 },
            "top_content_type": null,
            "content_type_distribution": null,
            "target_word_count": null,
            "competitors": [{
                "rank": 1,
                "url": null,
                "title": null,
                "word_count": null,
                "headings": null
            }],
            "ideas": null
        }))
        .unwrap();

        assert_eq!(profile.target_word_count, 0);
        assert!(profile.content_type_distribution.is_empty());
        assert!(profile.ideas.people_also_ask.is_empty());
        let competitor = &profile.competitors[0];
        assert_eq!(competitor.url, "");
        assert_eq!(competitor.title, "");
        assert_eq!(competitor.word_count, 0);
        assert!(competitor.headings.is_empty());

        let profile = SerpProfile::from_json_value(json!({
            "keyword": "SEO",
            "intent_stats": { "informational": 0.6, "transactional": 0.4 },
            "competitors": null,
            "ideas": { "people_also_ask": null }
        }))
        .unwrap();
        assert!(profile.competitors.is_empty());
        assert!(profile.questions().next().is_none());
    }

    #[test]
    fn test_rejects_non_object() {
        let err = SerpProfile::from_json_str("[1, 2, 3]").unwrap_err();
        assert_eq!(validation_kind(err).0, ValidationErrorKind::Schema);
    }

    #[test]
    fn test_rejects_missing_keyword() {
        let err = SerpProfile::from_json_value(json!({
            "intent_stats": { "informational": 0.5, "transactional": 0.5 }
        }))
        .unwrap_err();
        assert_eq!(
            validation_kind(err),
            (ValidationErrorKind::MissingField, Some("keyword".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_transactional_share() {
        let err = SerpProfile::from_json_value(json!({
            "keyword": "SEO",
            "intent_stats": { "informational": 0.5 }
        }))
        .unwrap_err();
        assert_eq!(
            validation_kind(err),
            (
                ValidationErrorKind::MissingField,
                Some("intent_stats.transactional".to_string())
            )
        );
    }

    #[test]
    fn test_rejects_blank_keyword_and_zero_rank() {
        let err = SerpProfile::from_json_value(json!({
            "keyword": "   ",
            "intent_stats": { "informational": 0.5, "transactional": 0.5 }
        }))
        .unwrap_err();
        assert_eq!(validation_kind(err).0, ValidationErrorKind::Format);

        let err = SerpProfile::from_json_value(json!({
            "keyword": "SEO",
            "intent_stats": { "informational": 0.5, "transactional": 0.5 },
            "competitors": [{ "rank": 0 }]
        }))
        .unwrap_err();
        assert_eq!(
            validation_kind(err),
            (ValidationErrorKind::Range, Some("competitors[0].rank".to_string()))
        );
    }

    #[test]
    fn test_malformed_competitor_is_schema_error() {
        let err = SerpProfile::from_json_value(json!({
            "keyword": "SEO",
            "intent_stats": { "informational": 0.5, "transactional": 0.5 },
            "competitors": [{ "rank": 1, "headings": [42] }]
        }))
        .unwrap_err();
        assert_eq!(validation_kind(err).0, ValidationErrorKind::Schema);
    }

    #[test]
    fn test_heading_level_filter_is_case_insensitive() {
        let competitor = Competitor::new(1)
            .with_heading("H2", "料金")
            .with_heading("h3", "詳細")
            .with_heading("h2", "評判");
        assert_eq!(competitor.headings_at("h2").collect::<Vec<_>>(), vec!["料金", "評判"]);
    }
}
