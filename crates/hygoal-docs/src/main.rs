//! Hygoal docs CLI - inspect, check and export the documentation site configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "hygoal-docs")]
#[command(about = "Inspect, check and export the Hygoal documentation site configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in config and scaffold a page for every link
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,

        /// Content directory to scaffold
        #[arg(short, long, default_value = "docs")]
        docs: PathBuf,
    },

    /// Validate the config, and optionally that every link has a page
    Check {
        /// Content directory to check links against
        #[arg(short, long)]
        docs: Option<PathBuf>,
    },

    /// Print the config as JSON for the renderer
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which sidebar a page path selects
    Sidebar {
        /// Page path, e.g. /protocol/handshake
        path: String,
    },

    /// Render the navigation shell for a page path
    Render {
        /// Page path, e.g. /protocol/handshake
        path: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so stdout stays machine readable
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes, docs } => {
            commands::init::run(&cli.config, &docs, yes)?;
        }
        Commands::Check { docs } => {
            commands::check::run(&cli.config, docs.as_deref())?;
        }
        Commands::Export { output } => {
            commands::export::run(&cli.config, output.as_deref())?;
        }
        Commands::Sidebar { path } => {
            commands::sidebar::run(&cli.config, &path)?;
        }
        Commands::Render { path, output } => {
            commands::render::run(&cli.config, &path, output.as_deref())?;
        }
    }

    Ok(())
}
