//! CLI Common Utilities
//!
//! Shared input/output handling for CLI commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::types::{BriefError, Result, SerpProfile, ValidationError};

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
}

impl CommandContext {
    /// Load configuration, merging `config_path` on top of global/project config
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            config: ConfigLoader::load_with(config_path)?,
        })
    }
}

/// Read and validate a profile from a file, or stdin when `path` is `-`
pub fn read_profile(path: &Path) -> Result<SerpProfile> {
    if path == Path::new(STDIN_PATH) {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return SerpProfile::from_json_str(&input);
    }

    if !path.exists() {
        return Err(BriefError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Profile not found: {}", path.display()),
        )));
    }

    SerpProfile::from_path(path)
}

/// Write `content` to `output`, or stdout when none is given
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}

/// Output format for rendered outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format '{}'. Valid values: text, json, yaml, markdown",
                s
            )),
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Reject formats a command cannot produce
    pub fn ensure_one_of(self, command: &str, allowed: &[OutputFormat]) -> Result<Self> {
        if allowed.contains(&self) {
            return Ok(self);
        }
        let names: Vec<_> = allowed.iter().map(OutputFormat::as_str).collect();
        Err(ValidationError::from_message(format!(
            "{} supports only {} output, got '{}'",
            command,
            names.join(" and "),
            self.as_str()
        ))
        .with_field("format")
        .into())
    }
}
