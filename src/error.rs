use thiserror::Error;

/// Errors that can abort a crawl or a store operation
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Could not establish a WebDriver session
    #[error("failed to connect to WebDriver at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: fantoccini::error::NewSessionError,
    },

    /// A WebDriver command (navigation, page source) failed
    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::CmdError),

    /// A page fetch did not complete within the configured deadline
    #[error("fetch timed out for {0}")]
    FetchTimeout(String),

    /// Reading or writing a persisted file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted file could not be (de)serialized
    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed or page URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A filter pattern could not be compiled
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Reasons a fetched page yields no record.
///
/// These are expected outcomes, not failures: the crawl logs them,
/// counts them, and moves on to the next location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// No title-bearing element matched; the record cannot be stored
    MissingTitle,
    /// The page matched a site's excluded-content rule (e.g. podcasts)
    ExcludedContent,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::MissingTitle => write!(f, "title not found"),
            Skip::ExcludedContent => write!(f, "excluded content type"),
        }
    }
}

/// Errors surfaced by the labeling service
#[derive(Debug, Error)]
pub enum LabelError {
    /// Every record in the loaded collection already carries a label
    #[error("no unlabeled records remaining")]
    NoRecordsRemaining,

    /// The submitted record id does not exist in the collection
    #[error("no record at index {0}")]
    UnknownRecord(usize),

    /// Persisting the labeled collection failed
    #[error("failed to persist labels: {0}")]
    Store(#[from] CrawlError),
}
