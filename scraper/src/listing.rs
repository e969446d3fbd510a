use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::debug;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// A link as it appears on the page, before any cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemLink {
    pub text: String,
    pub href: Option<String>,
}

/// One problem captured from the listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScrapedProblem {
    /// Inner text of the link; usually several lines
    /// ("1. Two Sum", "55.2%", "Easy").
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Attached,
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Reached,
    TimedOut,
}

/// A listing page whose results container loads more rows as it is scrolled.
pub trait ListingPage {
    fn wait_for_container(&mut self, timeout: Duration) -> WaitOutcome;

    /// Scroll the results container (not the window) to its bottom.
    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError>;

    fn wait_for_spinner(&mut self, state: SpinnerState, timeout: Duration) -> WaitOutcome;

    /// Problem links currently inside the container.
    fn problem_links(&self) -> Vec<ProblemLink>;
}

#[derive(Debug, Clone)]
pub struct ScrollOptions {
    pub container_timeout: Duration,
    pub scroll_pause: Duration,
    pub spinner_appear_timeout: Duration,
    pub spinner_vanish_timeout: Duration,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        ScrollOptions {
            container_timeout: Duration::from_millis(8_000),
            scroll_pause: Duration::from_millis(5_000),
            spinner_appear_timeout: Duration::from_millis(5_000),
            spinner_vanish_timeout: Duration::from_millis(10_000),
        }
    }
}

/// Scroll until a pass adds no new problem links, then return them all.
/// Only a missing container is fatal; spinner timeouts are ignored.
pub fn ensure_all_loaded<P: ListingPage>(
    page: &mut P,
    options: &ScrollOptions,
) -> Result<Vec<ProblemLink>, ScrapeError> {
    if page.wait_for_container(options.container_timeout) == WaitOutcome::TimedOut {
        return Err(ScrapeError::ContainerNotFound);
    }

    let mut previous_count = None;
    loop {
        page.scroll_to_bottom()?;
        thread::sleep(options.scroll_pause);
        wait_out_spinner(page, options);

        let links = page.problem_links();
        debug!("{} problem links loaded", links.len());
        if previous_count == Some(links.len()) {
            return Ok(links);
        }
        previous_count = Some(links.len());
    }
}

fn wait_out_spinner<P: ListingPage>(page: &mut P, options: &ScrollOptions) {
    match page.wait_for_spinner(SpinnerState::Attached, options.spinner_appear_timeout) {
        WaitOutcome::TimedOut => debug!("Spinner not found"),
        WaitOutcome::Reached => {
            if page.wait_for_spinner(SpinnerState::Detached, options.spinner_vanish_timeout)
                == WaitOutcome::TimedOut
            {
                debug!("Spinner still visible after {:?}, continuing", options.spinner_vanish_timeout);
            }
        }
    }
}

/// Clean up link text and make site-relative hrefs absolute.
pub fn collect_problems(links: Vec<ProblemLink>, site: &Url) -> Vec<ScrapedProblem> {
    links
        .into_iter()
        .map(|link| {
            let href = link.href.unwrap_or_default();
            let url = if href.starts_with('/') {
                site.join(&href).map(String::from).unwrap_or(href)
            } else {
                href
            };
            ScrapedProblem {
                title: link.text.trim().to_string(),
                url,
            }
        })
        .collect()
}

/// The raw listing page: one linked row per problem, in page order.
pub fn build_listing_html(
    company: &str,
    problems: &[ScrapedProblem],
    captured_at: DateTime<Local>,
) -> String {
    let company = escape(company);
    let mut html = vec![
        "<html>".to_string(),
        format!(
            "<head><meta charset='utf-8'><title>{} LeetCode Problems</title>",
            company
        ),
        "<style>body{font-family:system-ui,Arial}ol{line-height:1.6}</style></head>".to_string(),
        "<body>".to_string(),
        format!(
            "<h1>{} LeetCode Problems ({} total)</h1>",
            company,
            problems.len()
        ),
        format!("<p>Captured {}</p>", captured_at.format("%Y-%m-%d %H:%M")),
        "<ol>".to_string(),
    ];
    for problem in problems {
        html.push(format!(
            "  <li><a href='{}' target='_blank' rel='noopener'>{}</a></li>",
            escape(&problem.url),
            escape(&problem.title)
        ));
    }
    html.extend(["</ol>", "</body>", "</html>"].map(String::from));
    html.join("\n")
}

pub fn save_listing(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)
        .with_context(|| format!("Failed to write listing: {}", path.display()))
}

pub fn save_snapshot(path: &Path, problems: &[ScrapedProblem]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(problems).context("Failed to serialize scraped problems")?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

/// "microsoft" -> "Microsoft"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
