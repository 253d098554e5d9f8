//! Config Command
//!
//! Manage briefweave configuration.
//!
//! Usage:
//!   briefweave config show [-f text|json]
//!   briefweave config path
//!   briefweave config init [-g] [--force]

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat};
use crate::config::{Config, ConfigLoader};
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
    println!("{}", render(&ctx.config, format)?);
    Ok(())
}

/// TOML for text, JSON for json
pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    let format = format.ensure_one_of("config show", &[OutputFormat::Text, OutputFormat::Json])?;
    ConfigLoader::render(config, format == OutputFormat::Json)
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global or project configuration
pub fn init(global: bool, force: bool) -> Result<()> {
    let path = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    let scope = if global { "global" } else { "project" };
    Output::new().success(&format!("Initialized {} configuration", scope));
    println!("  Config: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_follows_parsed_format() {
        let config = Config::default();

        let format: OutputFormat = "JSON".parse().unwrap();
        let json = render(&config, format).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outline"]["max_h3_per_section"], 5);

        let toml = render(&config, OutputFormat::Text).unwrap();
        assert!(toml.contains("[outline]"));

        assert!(render(&config, OutputFormat::Markdown).unwrap_err().is_input_error());
    }
}
