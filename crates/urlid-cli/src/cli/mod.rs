//! CLI for urlid.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlid_core::{config, IdFormat};

use commands::{run_completions, run_generate, run_man, run_verify};

/// Top-level CLI for urlid.
#[derive(Debug, Parser)]
#[command(name = "urlid")]
#[command(about = "urlid: normalize URLs and derive stable IDs for deduplication", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the ID of each URL.
    Generate {
        /// URLs to identify.
        #[arg(required = true)]
        urls: Vec<String>,
        /// ID rendering: decimal or hex (overrides config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<IdFormat>,
        /// Print one JSON object per URL instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// Check a fixture file of `<url>\t|\t<expected-id>` lines.
    Verify {
        /// Path to the fixture file.
        path: PathBuf,
        /// ID rendering: decimal or hex (overrides config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<IdFormat>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Generate { urls, format, json } => {
                let format = resolve_format(format)?;
                run_generate(&urls, format, json)?;
            }
            CliCommand::Verify { path, format } => {
                let format = resolve_format(format)?;
                run_verify(&path, format)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Flag wins; otherwise the configured format.
fn resolve_format(flag: Option<IdFormat>) -> Result<IdFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg.id_format)
}

#[cfg(test)]
mod tests;
