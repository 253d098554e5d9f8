//! Outline Command
//!
//! Synthesize an article outline from a SERP profile.
//!
//! Usage:
//!   briefweave outline <PROFILE> [-f text|json|yaml|markdown] [-o FILE]

use std::path::{Path, PathBuf};

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat, read_profile, write_output};
use crate::outline::OutlinePipeline;
use crate::types::{ArticleStructure, Result};

pub fn run(
    ctx: &CommandContext,
    profile_path: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let structure = OutlinePipeline::new(&ctx.config.outline).synthesize(&profile);

    match (format, &output) {
        (OutputFormat::Text, None) => Output::new().outline(&structure),
        // plain text into a file falls back to markdown
        (OutputFormat::Text, Some(_)) => write_output(output.as_ref(), &structure.to_markdown())?,
        (format, _) => write_output(output.as_ref(), &render(&structure, format)?)?,
    }

    Ok(())
}

/// Render an outline in a machine-readable format
pub fn render(structure: &ArticleStructure, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(structure)?,
        OutputFormat::Yaml => serde_yaml::to_string(structure)?,
        OutputFormat::Markdown | OutputFormat::Text => structure.to_markdown(),
    })
}
