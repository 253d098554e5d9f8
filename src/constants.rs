//! Global Constants
//!
//! Centralized constants for outline synthesis and step generation.
//! All magic numbers should be defined here with documentation.

/// Outline synthesis constants
pub mod outline {
    /// Share of competitors that must use a heading for it to count as common
    pub const COMMON_HEADING_RATIO: f64 = 0.3;

    /// Normalized headings shorter than this (in characters) are noise
    pub const MIN_HEADING_CHARS: usize = 2;

    /// Maximum H3 entries per section
    pub const MAX_H3_PER_SECTION: usize = 5;

    /// Maximum PAA questions injected under the FAQ section
    pub const MAX_FAQ_QUESTIONS: usize = 3;

    /// Heading level consumed by competitor aggregation
    pub const AGGREGATED_LEVEL: &str = "h2";

    /// Content type that switches the H1 to the ranking template
    pub const COMPARISON_CONTENT_TYPE: &str = "comparison";

    /// Bracket characters stripped during heading normalization
    pub const STRIPPED_BRACKETS: [char; 2] = ['【', '】'];
}

/// Profile field names used by boundary validation
pub mod profile {
    pub const INFORMATIONAL: &str = "informational";
    pub const TRANSACTIONAL: &str = "transactional";
}

/// Content step generation constants
pub mod generation {
    /// Default delay between streamed steps (milliseconds)
    pub const DEFAULT_STEP_DELAY_MS: u64 = 0;
}
