//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/briefweave/) and project (.briefweave/) level configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{generation, outline};
use crate::types::{BriefError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Outline synthesis settings
    pub outline: OutlineConfig,

    /// Content step generation settings
    pub generation: GenerationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            outline: OutlineConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `BriefError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        self.outline.validate()
    }
}

// =============================================================================
// Outline Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Share of competitors that must use a heading (0.0 < ratio <= 1.0)
    pub common_heading_ratio: f64,

    /// Minimum normalized heading length, in characters
    pub min_heading_chars: usize,

    /// H3 cap per section
    pub max_h3_per_section: usize,

    /// PAA questions injected under the FAQ section
    pub max_faq_questions: usize,

    /// Lower-case ASCII letters during normalization
    pub fold_latin_case: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            common_heading_ratio: outline::COMMON_HEADING_RATIO,
            min_heading_chars: outline::MIN_HEADING_CHARS,
            max_h3_per_section: outline::MAX_H3_PER_SECTION,
            max_faq_questions: outline::MAX_FAQ_QUESTIONS,
            fold_latin_case: false,
        }
    }
}

impl OutlineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.common_heading_ratio > 0.0 && self.common_heading_ratio <= 1.0) {
            return Err(BriefError::Config(format!(
                "outline.common_heading_ratio must be in (0.0, 1.0], got {}",
                self.common_heading_ratio
            )));
        }

        if self.max_h3_per_section == 0 {
            return Err(BriefError::Config(
                "outline.max_h3_per_section must be greater than 0".to_string(),
            ));
        }

        if self.max_faq_questions > self.max_h3_per_section {
            return Err(BriefError::Config(format!(
                "outline.max_faq_questions ({}) must not exceed outline.max_h3_per_section ({})",
                self.max_faq_questions, self.max_h3_per_section
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Generation Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Simulated writer latency between streamed steps (milliseconds)
    pub step_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: generation::DEFAULT_STEP_DELAY_MS,
        }
    }
}
