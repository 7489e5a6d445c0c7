//! CLI for the SMG sitemap generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smg_core::config;
use std::path::PathBuf;

use commands::{run_index, run_sitemap};

/// Top-level CLI for the SMG sitemap generator.
#[derive(Debug, Parser)]
#[command(name = "smg")]
#[command(about = "SMG: sitemap generator driven by HTTP Last-Modified probing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate sitemap.xml from a newline-delimited URL list.
    Sitemap {
        /// Path to the URL list file (one URL per line, `#` comments allowed).
        file: PathBuf,
    },

    /// Generate sitemap_index.xml from a newline-delimited list of sitemap URLs.
    Index {
        /// Path to the sitemap URL list file (one URL per line, `#` comments allowed).
        file: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sitemap { file } => run_sitemap(&file, &cfg)?,
            CliCommand::Index { file } => run_index(&file, &cfg)?,
        }

        Ok(())
    }
}
