use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The browser session could not be launched or configured.
    #[error("browser error for {url}: {reason}")]
    Browser { url: String, reason: String },

    /// Navigation did not complete: DNS failure, timeout, or a terminal
    /// non-2xx response.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The blocking fetch task was cancelled or panicked.
    #[error("fetch task failed for {url}: {reason}")]
    TaskJoin { url: String, reason: String },
}
