use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use briefweave::BriefError;
use briefweave::cli::{CommandContext, OutputFormat};

#[derive(Parser)]
#[command(name = "briefweave")]
#[command(
    version,
    about = "SERP-driven article outline generator for SEO content briefs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Extra config file merged over global/project config")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize an article outline from a SERP profile
    Outline {
        #[arg(help = "Path to the SERP profile JSON ('-' for stdin)")]
        profile: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json, yaml, markdown"
        )]
        format: OutputFormat,
        #[arg(long, short, help = "Write to file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Stream per-section content steps for a SERP profile
    Steps {
        #[arg(help = "Path to the SERP profile JSON ('-' for stdin)")]
        profile: PathBuf,
        #[arg(long = "delay-ms", help = "Delay between steps (overrides config)")]
        delay_ms: Option<u64>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json (one step per line)"
        )]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mbriefweave encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            // bad profile or arguments, as opposed to an environment failure
            match e.downcast_ref::<BriefError>() {
                Some(err) if err.is_input_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Outline {
            profile,
            format,
            output,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            briefweave::cli::commands::outline::run(&ctx, &profile, format, output)?;
        }
        Commands::Steps {
            profile,
            delay_ms,
            format,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(briefweave::cli::commands::steps::run(
                &ctx, &profile, delay_ms, format,
            ))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                let ctx = CommandContext::load(cli.config.as_deref())?;
                briefweave::cli::commands::config::show(&ctx, format)?;
            }
            ConfigAction::Path => {
                briefweave::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                briefweave::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
