use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use problem_scraper::{
    build_listing_html, capitalize, collect_problems, ensure_all_loaded, save_listing,
    save_snapshot, PageSelectors, ScrollOptions, StaticPage, DEFAULT_CONTAINER, DEFAULT_SPINNER,
};
use reqwest::Url;

const SITE: &str = "https://leetcode.com";

/// Capture every problem of a LeetCode company list into <Company>_leetcode.html
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Company slug as used in the list URL, e.g. "microsoft"
    company: String,

    /// List URL (default: the company's six-month list)
    #[arg(long)]
    list_url: Option<String>,

    /// Read a saved copy of the list page instead of fetching it
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (default: <Company>_leetcode.html)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write the captured problems as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Cookie header of a logged-in session
    #[arg(long, env = "LEETCODE_COOKIE", hide_env_values = true)]
    cookie: Option<String>,

    /// CSS selector of the scrolling results container
    #[arg(long, default_value = DEFAULT_CONTAINER)]
    container: String,

    /// CSS selector of the loading spinner
    #[arg(long, default_value = DEFAULT_SPINNER)]
    spinner: String,

    /// Pause after each scroll
    #[arg(long, default_value_t = 5000)]
    scroll_pause_ms: u64,

    /// How long to wait for the results container before giving up
    #[arg(long, default_value_t = 8000)]
    container_timeout_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let company = capitalize(&cli.company);
    let slug = cli.company.to_lowercase();

    let selectors = PageSelectors {
        container: cli.container,
        spinner: cli.spinner,
    };
    let options = ScrollOptions {
        container_timeout: Duration::from_millis(cli.container_timeout_ms),
        scroll_pause: Duration::from_millis(cli.scroll_pause_ms),
        ..ScrollOptions::default()
    };

    let mut page = match &cli.input {
        Some(path) => {
            println!("Reading saved list page {}...", path.display());
            let html = fs::read_to_string(path)
                .with_context(|| format!("Failed to read saved page: {}", path.display()))?;
            StaticPage::from_html(&html, &selectors)?
        }
        None => {
            let url = cli.list_url.unwrap_or_else(|| {
                format!("{}/company/{}/?favoriteSlug={}-six-months", SITE, slug, slug)
            });
            println!("Opening {} six-month list...", company);
            StaticPage::fetch(&url, cli.cookie.as_deref(), &selectors)?
        }
    };

    let links = ensure_all_loaded(&mut page, &options)?;
    let site = Url::parse(SITE).context("Invalid site URL")?;
    let problems = collect_problems(links, &site);

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}_leetcode.html", company)));
    let html = build_listing_html(&company, &problems, chrono::Local::now());
    save_listing(&out, &html)?;

    if let Some(json_path) = &cli.json {
        save_snapshot(json_path, &problems)?;
    }

    println!(
        "Saved {} | {} problems captured",
        fs::canonicalize(&out).unwrap_or(out).display(),
        problems.len()
    );

    Ok(())
}
