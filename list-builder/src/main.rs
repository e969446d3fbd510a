mod anchor;
mod category;
mod discover;
mod entry;
mod error;
mod group;
mod loader;
mod merge;
mod pipeline;
use crate::discover::SourceQuery;
use crate::pipeline::{build_master, group_listing};
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SUFFIX: &str = "_leetcode_grouped.html";

/// Groups scraped LeetCode company lists and merges them into one master page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reformat one scraped listing into Easy/Medium/Hard sections
    Group {
        /// Scraped listing, e.g. Microsoft_leetcode.html
        src: PathBuf,

        /// Output file (default: <src stem>_grouped.html next to the source)
        #[arg(long)]
        dst: Option<PathBuf>,

        /// Company name for the page title (default: src file name up to the first '_')
        #[arg(long)]
        company: Option<String>,
    },
    /// Merge every <base-dir>/<company>/*<suffix> page into one master page
    Master {
        /// Directory holding one sub-directory per company
        #[arg(long, default_value = "DSA")]
        base_dir: PathBuf,

        /// File name suffix of the per-company grouped pages
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Output file (default: <base-dir>/master_leetcode.html)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also write the merged problems as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Group { src, dst, company } => {
            let dst = dst.unwrap_or_else(|| grouped_path(&src));
            let company = company.unwrap_or_else(|| company_from_path(&src));
            group(&src, &dst, &company)
        }
        Command::Master {
            base_dir,
            suffix,
            out,
            json,
        } => {
            let out = out.unwrap_or_else(|| base_dir.join("master_leetcode.html"));
            let query = SourceQuery { base_dir, suffix };
            master(&query, &out, json.as_deref())
        }
    }
}

fn group(src: &Path, dst: &Path, company: &str) -> Result<()> {
    if !src.exists() {
        return Err(anyhow::anyhow!("{} not found", src.display()));
    }

    let html = fs::read_to_string(src)
        .with_context(|| format!("Failed to read listing: {}", src.display()))?;
    let grouped = group_listing(&html);
    if grouped.skipped_rows > 0 {
        warn!("Skipped {} unparseable rows in {}", grouped.skipped_rows, src.display());
    }

    fs::write(dst, grouped.render(company))
        .with_context(|| format!("Failed to write grouped page: {}", dst.display()))?;

    println!(
        "Created {} ({} problems)",
        display_path(dst),
        grouped.groups.total()
    );
    Ok(())
}

fn master(query: &SourceQuery, out: &Path, json: Option<&Path>) -> Result<()> {
    let master = build_master(query)?;
    let stats = &master.stats;
    info!(
        "Merged {} rows from {} sources into {} problems ({} rows skipped, {} conflicting repeats)",
        stats.rows,
        stats.sources,
        master.groups.total(),
        stats.skipped_rows,
        stats.conflicts
    );

    let snapshot = match json {
        Some(json_path) => Some((
            json_path,
            serde_json::to_string_pretty(&master.entries())
                .context("Failed to serialize merged problems")?,
        )),
        None => None,
    };
    let page = master.render();

    // a failed JSON write must leave no page behind
    if let Some((json_path, json)) = snapshot {
        fs::write(json_path, json)
            .with_context(|| format!("Failed to write JSON file: {}", json_path.display()))?;
    }
    fs::write(out, page)
        .with_context(|| format!("Failed to write master page: {}", out.display()))?;

    println!(
        "Created {} ({} unique problems)",
        display_path(out),
        master.groups.total()
    );
    Ok(())
}

/// Microsoft_leetcode.html -> Microsoft_leetcode_grouped.html
fn grouped_path(src: &Path) -> PathBuf {
    let stem = src.file_stem().unwrap_or_default().to_string_lossy();
    src.with_file_name(format!("{}_grouped.html", stem))
}

/// Microsoft_leetcode.html -> Microsoft
fn company_from_path(src: &Path) -> String {
    let stem = src.file_stem().unwrap_or_default().to_string_lossy();
    stem.split('_').next().unwrap_or_default().to_string()
}

fn display_path(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
