use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("results container not found (the list may need a logged-in session, see --cookie)")]
    ContainerNotFound,
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
    #[error("request failed")]
    Http(#[from] reqwest::Error),
}
