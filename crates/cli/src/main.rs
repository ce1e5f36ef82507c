mod commands;
mod config;
mod error;
mod render;
mod touch_file;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::check::CheckOptions;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Change ringing touch checker.
#[derive(Parser)]
#[command(name = "touchcheck", version, about = "Change ringing touch checker")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every touch in a file comes round at its stated length
    Check {
        /// Path to the touch file
        touches: PathBuf,
        /// Method catalogue TOML (default: built-in Surprise Major set)
        #[arg(long)]
        methods: Option<PathBuf>,
        /// Report invalid touches and carry on instead of stopping
        #[arg(long)]
        skip_invalid: bool,
        /// Check touches on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// List the methods in the catalogue with their lead heads
    Methods {
        /// Method catalogue TOML (default: built-in Surprise Major set)
        #[arg(long)]
        methods: Option<PathBuf>,
    },

    /// Print the rows of one lead of a method
    Lead {
        /// Shorthand letter of the method
        shorthand: String,
        /// Method catalogue TOML (default: built-in Surprise Major set)
        #[arg(long)]
        methods: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            touches,
            methods,
            skip_invalid,
            parallel,
        } => {
            commands::check::cmd_check(CheckOptions {
                touches: &touches,
                methods: methods.as_deref(),
                skip_invalid,
                parallel,
                output: cli.output,
                quiet: cli.quiet,
            });
        }
        Commands::Methods { methods } => {
            commands::methods::cmd_methods(methods.as_deref(), cli.output, cli.quiet);
        }
        Commands::Lead { shorthand, methods } => {
            commands::lead::cmd_lead(&shorthand, methods.as_deref(), cli.output, cli.quiet);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("touchcheck={level},touchcheck_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
