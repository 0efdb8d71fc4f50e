//! Scrapes Vietnamese news sites through a WebDriver session, persists the
//! results as flat JSON files, and serves a small web interface for manual
//! category labeling.

pub mod config;
pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod frontier;
pub mod server;
pub mod sites;
pub mod store;

// Re-export commonly used types for convenience
pub use config::CrawlerConfig;
pub use error::CrawlError;
pub use extract::ArticleRecord;
pub use sites::Site;

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use fetch::BrowserSession;
use store::Store;

/// Builder for one crawl invocation against a single site.
///
/// Owns the browser session for exactly the duration of the run: the
/// session is opened after the cached-result check and closed before the
/// call returns, success or not.
pub struct Crawl {
    site: Site,
    config: CrawlerConfig,
}

impl Crawl {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            config: CrawlerConfig::default(),
        }
    }

    /// Replace the whole configuration (e.g. one loaded from a file)
    pub fn with_config(mut self, config: CrawlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the frontier size limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Enable recursive frontier expansion
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    /// Set the directory holding the persisted JSON files
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.config.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Point at a non-default WebDriver server
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Skip timed-out locations instead of aborting the batch
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.config.abort_on_timeout = !keep_going;
        self
    }

    /// Run discovery only: expand the site's article locations and
    /// persist the accumulated frontier set.
    pub async fn discover(self) -> Result<HashSet<String>, CrawlError> {
        let config = self.config.with_env_overrides();
        let mut session = connect(&config).await?;
        let outcome = crawler::discover_locations(&config, self.site, &mut session).await;
        close(session).await;
        outcome
    }

    /// Run a full crawl: discovery if needed, then extraction.
    ///
    /// Returns the cached collection without opening a browser session
    /// when `{stem}.json` already exists.
    pub async fn run(self) -> Result<Vec<ArticleRecord>, CrawlError> {
        let config = self.config.with_env_overrides();

        let store = Store::new(&config.data_dir);
        if let Some(articles) = store.load_articles(self.site.profile().stem)? {
            ::log::info!(
                "Using cached collection of {} articles for {}",
                articles.len(),
                self.site
            );
            return Ok(articles);
        }

        let mut session = connect(&config).await?;
        let outcome = crawler::run(&config, self.site, &mut session).await;
        close(session).await;
        outcome
    }
}

async fn connect(config: &CrawlerConfig) -> Result<BrowserSession, CrawlError> {
    BrowserSession::connect(
        &config.webdriver_url,
        Duration::from_secs(config.fetch_timeout_secs),
    )
    .await
}

async fn close(session: BrowserSession) {
    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }
}
