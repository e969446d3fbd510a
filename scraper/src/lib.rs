pub mod error;
pub mod listing;
pub mod page;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::error::ScrapeError;
pub use crate::listing::{
    build_listing_html, capitalize, collect_problems, ensure_all_loaded, save_listing,
    save_snapshot, ListingPage, ProblemLink, ScrapedProblem, ScrollOptions, SpinnerState,
    WaitOutcome,
};
pub use crate::page::{PageSelectors, StaticPage, DEFAULT_CONTAINER, DEFAULT_SPINNER};
