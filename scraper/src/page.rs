use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::listing::{ListingPage, ProblemLink, SpinnerState, WaitOutcome};

/// Results container of a company list (2025-06 layout).
pub const DEFAULT_CONTAINER: &str = "body > div:nth-of-type(1) > div:nth-of-type(1) > \
     div:nth-of-type(4) > div > div:nth-of-type(2)";
/// Loading spinner shown while the next slice of rows is fetched.
pub const DEFAULT_SPINNER: &str = "body > div:nth-of-type(1) > div:nth-of-type(1) > \
     div:nth-of-type(4) > div > div:nth-of-type(2) > div:nth-of-type(2) > \
     div:nth-of-type(2) > div > div > div > div > div > img";
const PROBLEM_LINKS: &str = r#"a[href*="/problems/"]"#;

#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub container: String,
    pub spinner: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        PageSelectors {
            container: DEFAULT_CONTAINER.to_string(),
            spinner: DEFAULT_SPINNER.to_string(),
        }
    }
}

/// A listing page that is already fully rendered: fetched over HTTP or
/// read from a saved copy. Scrolling loads nothing new.
pub struct StaticPage {
    document: Html,
    container: Selector,
    spinner: Selector,
    links: Selector,
}

impl StaticPage {
    pub fn from_html(html: &str, selectors: &PageSelectors) -> Result<Self, ScrapeError> {
        Ok(StaticPage {
            document: Html::parse_document(html),
            container: parse_selector(&selectors.container)?,
            spinner: parse_selector(&selectors.spinner)?,
            links: parse_selector(PROBLEM_LINKS)?,
        })
    }

    /// Fetch the page, sending `cookie` for a logged-in session if given.
    pub fn fetch(
        url: &str,
        cookie: Option<&str>,
        selectors: &PageSelectors,
    ) -> Result<Self, ScrapeError> {
        info!("Opening {}", url);
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        let mut request = client.get(url);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        let html = request.send()?.error_for_status()?.text()?;

        Self::from_html(&html, selectors)
    }

    fn container(&self) -> Option<ElementRef<'_>> {
        self.document.select(&self.container).next()
    }
}

impl ListingPage for StaticPage {
    fn wait_for_container(&mut self, _timeout: Duration) -> WaitOutcome {
        if self.container().is_some() {
            WaitOutcome::Reached
        } else {
            WaitOutcome::TimedOut
        }
    }

    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError> {
        Ok(())
    }

    fn wait_for_spinner(&mut self, state: SpinnerState, _timeout: Duration) -> WaitOutcome {
        let present = self.document.select(&self.spinner).next().is_some();
        match (state, present) {
            (SpinnerState::Attached, true) | (SpinnerState::Detached, false) => WaitOutcome::Reached,
            _ => WaitOutcome::TimedOut,
        }
    }

    fn problem_links(&self) -> Vec<ProblemLink> {
        let Some(container) = self.container() else {
            return Vec::new();
        };

        container
            .select(&self.links)
            .map(|link| ProblemLink {
                text: inner_text(link),
                href: link.value().attr("href").map(str::to_string),
            })
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Approximates a browser's innerText: one line per text node.
fn inner_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
