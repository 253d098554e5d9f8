//! briefweave - SERP-Driven Article Outline Generator
//!
//! Derives a structured SEO article outline from a JSON profile of
//! search-result signals: an H1 title, role-tagged H2 sections ordered by
//! search intent, and H3 sub-headings from "people also ask" questions and
//! headings that recur across competitor pages.
//!
//! ## Quick Start
//!
//! ```ignore
//! use briefweave::{SerpProfile, iterate_content_steps, synthesize_structure};
//!
//! let profile = SerpProfile::from_json_str(&json)?;
//! let structure = synthesize_structure(&profile);
//! for step in iterate_content_steps(&profile, &structure) {
//!     // hand step to the writer
//! }
//! ```
//!
//! ## Modules
//!
//! - [`outline`]: normalization, competitor aggregation, structure building and integration
//! - [`generation`]: per-section content steps (iterator and async stream)
//! - [`config`]: layered configuration
//! - [`types`]: profile input, outline output, errors

pub mod cli;
pub mod config;
pub mod constants;
pub mod generation;
pub mod outline;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, GenerationConfig, OutlineConfig};

// Error Types
pub use types::error::{BriefError, Result, ValidationError, ValidationErrorKind};

// Data Model
pub use types::{
    ArticleStructure, Competitor, ContentRole, GenerationStep, Heading, IntentStats, Section,
    SerpProfile,
};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use outline::{
    CommonHeading, HeaderNormalizer, HeadingAggregator, OutlinePipeline, StructureBuilder,
    StructureIntegrator, normalize_heading, synthesize_structure,
};

pub use generation::{
    ContentSteps, PlaceholderWriter, SectionWriter, iterate_content_steps,
    stream_content_steps,
};
