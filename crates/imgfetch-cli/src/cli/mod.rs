//! CLI for the imgfetch image downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgfetch_core::config;
use std::path::Path;

use commands::run_fetch;

/// Top-level CLI for the imgfetch image downloader.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: download and organize images from the web", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one or more image URLs into the destination directory.
    Fetch {
        /// Comma-separated image URLs. When omitted, a line is read from
        /// standard input.
        urls: Option<String>,

        /// Destination directory (overrides the configured default).
        #[arg(long, value_name = "DIR")]
        dest: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { urls, dest } => {
                let dest_dir = dest.unwrap_or_else(|| cfg.dest_dir.clone());
                run_fetch(&cfg, urls.as_deref(), Path::new(&dest_dir))?;
            }
        }

        Ok(())
    }
}
