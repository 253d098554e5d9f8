//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! The outline pipeline itself is total over a validated profile; errors only
//! surface at the boundaries:
//!
//! - **Validation**: profile JSON does not match the expected shape (fail fast)
//! - **Config**: configuration could not be loaded or is out of range
//! - **Generation**: a section writer failed while streaming steps
//! - **Io / Json / Yaml**: reading input or rendering output

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field or component that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
    /// Expected value or format
    pub expected: Option<String>,
    /// Actual value received
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Validation failed for '{}': {}", field, self.message)?;
        } else {
            write!(f, "Validation failed: {}", self.message)?;
        }
        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            write!(f, " (expected {}, got {})", expected, actual)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add expected/actual values
    pub fn with_comparison(
        mut self,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }

    /// Shorthand for a missing required field
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ValidationErrorKind::MissingField,
            format!("required field '{}' is missing", field),
        )
        .with_field(field)
    }

    /// Create from simple message
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::General, message)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input does not match the profile shape at all
    Schema,
    /// Required field missing
    MissingField,
    /// Invalid format
    Format,
    /// Value out of range
    Range,
    /// General validation error
    General,
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum BriefError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    /// Section writer failure while producing a generation step
    #[error("Generation failed for section {section}: {reason}")]
    Generation { section: usize, reason: String },
}

impl From<ValidationError> for BriefError {
    fn from(err: ValidationError) -> Self {
        BriefError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, BriefError>;

impl BriefError {
    /// Create a generation error for the section at `section`
    pub fn generation(section: usize, reason: impl Into<String>) -> Self {
        Self::Generation {
            section,
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied bad input (as opposed to an environment failure)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Json(_) | Self::Yaml(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::missing("keyword");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'keyword': required field 'keyword' is missing"
        );

        let err = ValidationError::new(ValidationErrorKind::Range, "rank must be positive")
            .with_field("competitors[0].rank")
            .with_comparison(">= 1", "0");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'competitors[0].rank': rank must be positive (expected >= 1, got 0)"
        );
    }

    #[test]
    fn test_validation_converts_to_brief_error() {
        let err: BriefError = ValidationError::from_message("bad").into();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "Validation failed: bad");
    }

    #[test]
    fn test_generation_error_display() {
        let err = BriefError::generation(3, "writer unavailable");
        assert_eq!(
            err.to_string(),
            "Generation failed for section 3: writer unavailable"
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_malformed_yaml_is_input_error() {
        let err: BriefError = serde_yaml::from_str::<Vec<String>>("{ unclosed")
            .unwrap_err()
            .into();
        assert!(err.is_input_error());
        assert!(!BriefError::Config("no home".into()).is_input_error());
    }
}
