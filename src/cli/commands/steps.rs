//! Steps Command
//!
//! Synthesize an outline and stream its content steps in section order.
//!
//! Usage:
//!   briefweave steps <PROFILE> [--delay-ms N] [-f text|json]

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat, read_profile};
use crate::generation::{PlaceholderWriter, stream_content_steps};
use crate::outline::OutlinePipeline;
use crate::types::Result;

pub async fn run(
    ctx: &CommandContext,
    profile_path: &Path,
    delay_ms: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let format = format.ensure_one_of("steps", &[OutputFormat::Text, OutputFormat::Json])?;

    let profile = read_profile(profile_path)?;
    let structure = OutlinePipeline::new(&ctx.config.outline).synthesize(&profile);
    let delay = Duration::from_millis(delay_ms.unwrap_or(ctx.config.generation.step_delay_ms));

    let out = Output::new();
    if format == OutputFormat::Text {
        out.header(&structure.title);
    }

    let writer = PlaceholderWriter;
    let mut steps = Box::pin(stream_content_steps(&profile, &structure, &writer, delay));
    while let Some(step) = steps.next().await {
        let step = step?;
        match format {
            // one object per line
            OutputFormat::Json => println!("{}", serde_json::to_string(&step)?),
            _ => out.step(&step),
        }
    }

    Ok(())
}
