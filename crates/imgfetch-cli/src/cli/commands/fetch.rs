//! `imgfetch fetch [URLS]` – download images from comma-separated URLs.

use anyhow::Result;
use imgfetch_core::batch;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::fetcher::{FetchOutcome, SkipReason};
use imgfetch_core::transport::CurlTransport;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

pub fn run_fetch(cfg: &FetchConfig, urls: Option<&str>, dest_dir: &Path) -> Result<()> {
    println!("Welcome to the Image Fetcher");
    println!("A tool for collecting and organizing images\n");

    let raw = match urls {
        Some(s) => s.to_string(),
        None => prompt_for_urls()?,
    };

    let url_list = batch::parse_url_list(&raw);
    let transport = CurlTransport::new(Duration::from_secs(cfg.timeout_secs));
    let outcomes = batch::run_batch(&transport, &url_list, dest_dir)?;

    let (mut saved, mut skipped, mut failed) = (0usize, 0usize, 0usize);
    for (url, outcome) in url_list.iter().zip(&outcomes) {
        match outcome {
            FetchOutcome::Saved { filename, path } => {
                saved += 1;
                println!("Successfully fetched: {filename}");
                println!("  Saved to: {}", path.display());
            }
            FetchOutcome::Skipped(SkipReason::NotAnImage { content_type }) => {
                skipped += 1;
                let ct = content_type.as_deref().unwrap_or("<none>");
                println!("Skipping: {url} (not an image, Content-Type={ct})");
            }
            FetchOutcome::Skipped(SkipReason::Duplicate { filename }) => {
                skipped += 1;
                println!("Skipped duplicate: {filename}");
            }
            FetchOutcome::Failed(err) => {
                failed += 1;
                println!("Error for {url}: {err}");
            }
        }
    }

    println!("\nAll done. {saved} saved, {skipped} skipped, {failed} failed.");
    Ok(())
}

fn prompt_for_urls() -> Result<String> {
    print!("Enter one or more image URLs (separated by commas): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
