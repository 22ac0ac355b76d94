//! Mould CLI - run component style transforms on saved props
//!
//! ```text
//! mould transform props.json --parent parent.json --config mould.toml
//! mould check props.json
//! ```
//!
//! Props are the JSON style-property groups saved by the design tool; `-`
//! reads them from stdin. The visual style record is printed as JSON.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run Mould component style transforms
#[derive(Parser, Debug)]
#[command(name = "mould")]
#[command(about = "Run Mould component style transforms on saved props")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform input style-property groups into a visual style record
    Transform {
        /// Style-property groups as JSON (`-` for stdin)
        props: PathBuf,

        /// Parent context as JSON
        #[arg(short, long)]
        parent: Option<PathBuf>,

        /// Transform config (mould.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Validate style-property groups
    Check {
        /// Style-property groups as JSON (`-` for stdin)
        props: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Transform {
            props,
            parent,
            config,
            compact,
        } => {
            let config = commands::load_config(config.as_deref())?;
            let props = commands::read_source(&props)?;
            let parent = parent
                .as_deref()
                .map(commands::read_source)
                .transpose()?;
            let style = commands::transform_json(&props, parent.as_deref(), &config)?;
            println!("{}", commands::render(&style, compact)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { props } => {
            let props = commands::read_source(&props)?;
            match commands::check_json(&props)? {
                None => {
                    println!("ok");
                    Ok(ExitCode::SUCCESS)
                }
                Some(report) => {
                    eprintln!("{report}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// `RUST_LOG` directives when given and valid, otherwise [`DEFAULT_LOG_FILTER`]
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
