//! Page fetching through a WebDriver session.
//!
//! The crawl driver and frontier expander never talk to fantoccini
//! directly; they receive a [`Fetch`] implementation, which keeps the
//! session explicitly scoped to one crawl invocation and lets tests run
//! against canned markup.

use std::time::Duration;

use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tokio::time::timeout;

use crate::error::CrawlError;

/// Anything that can turn a location into rendered page markup
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&mut self, url: &str) -> Result<String, CrawlError>;
}

/// A live WebDriver session configured for scraping: headless Chrome
/// with image loading disabled.
pub struct BrowserSession {
    client: Client,
    fetch_timeout: Duration,
}

impl BrowserSession {
    /// Connect to a WebDriver server and open one browser session
    pub async fn connect(webdriver_url: &str, fetch_timeout: Duration) -> Result<Self, CrawlError> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({
                "args": [
                    "--headless",
                    "--no-sandbox",
                    "--disable-gpu",
                    "--disable-dev-shm-usage",
                    "--blink-settings=imagesEnabled=false",
                ],
                "prefs": { "profile.managed_default_content_settings.images": 2 },
            }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await
            .map_err(|source| CrawlError::Connect {
                url: webdriver_url.to_string(),
                source,
            })?;

        ::log::debug!("Connected to WebDriver at {}", webdriver_url);
        Ok(Self {
            client,
            fetch_timeout,
        })
    }

    /// Close the underlying browser session.
    ///
    /// Consumes the session so a crawl cannot keep using it after cleanup.
    pub async fn close(self) -> Result<(), CrawlError> {
        self.client.close().await?;
        Ok(())
    }
}

impl Fetch for BrowserSession {
    async fn fetch(&mut self, url: &str) -> Result<String, CrawlError> {
        ::log::debug!("FETCH: {}", url);
        let deadline = self.fetch_timeout;
        let navigate = async {
            self.client.goto(url).await?;
            self.client.source().await
        };
        match timeout(deadline, navigate).await {
            Ok(Ok(source)) => Ok(source),
            Ok(Err(e)) => Err(CrawlError::Session(e)),
            Err(_) => Err(CrawlError::FetchTimeout(url.to_string())),
        }
    }
}
