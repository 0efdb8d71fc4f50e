//! Flat-file JSON persistence.
//!
//! Two files per site, both UTF-8 with Vietnamese text kept readable:
//! `{stem}_url.json` holds the discovered frontier set and `{stem}.json`
//! the final article collection. Saves always rewrite the whole file; a
//! crash mid-write can corrupt it, which is accepted for batch/manual use.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CrawlError;
use crate::extract::ArticleRecord;

/// Handle on the directory holding a site's persisted files
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the frontier-set file for a site stem
    pub fn url_path(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{stem}_url.json"))
    }

    /// Path of the article-collection file for a site stem
    pub fn article_path(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{stem}.json"))
    }

    /// Load the persisted frontier set, or `None` if never saved
    pub fn load_urls(&self, stem: &str) -> Result<Option<HashSet<String>>, CrawlError> {
        let path = self.url_path(stem);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let urls: Vec<String> = serde_json::from_str(&contents)?;
        ::log::debug!("Loaded {} frontier locations from {}", urls.len(), path.display());
        Ok(Some(urls.into_iter().collect()))
    }

    /// Overwrite the persisted frontier set
    pub fn save_urls(&self, stem: &str, urls: &HashSet<String>) -> Result<(), CrawlError> {
        let path = self.url_path(stem);
        let ordered: Vec<&String> = urls.iter().collect();
        fs::write(&path, serde_json::to_string(&ordered)?)?;
        ::log::info!("Saved {} frontier locations to {}", ordered.len(), path.display());
        Ok(())
    }

    /// Load the persisted article collection, or `None` if never saved
    pub fn load_articles(&self, stem: &str) -> Result<Option<Vec<ArticleRecord>>, CrawlError> {
        let path = self.article_path(stem);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let articles: Vec<ArticleRecord> = serde_json::from_str(&contents)?;
        ::log::debug!("Loaded {} articles from {}", articles.len(), path.display());
        Ok(Some(articles))
    }

    /// Overwrite the persisted article collection
    pub fn save_articles(&self, stem: &str, articles: &[ArticleRecord]) -> Result<(), CrawlError> {
        let path = self.article_path(stem);
        fs::write(&path, serde_json::to_string(articles)?)?;
        ::log::info!("Saved {} articles to {}", articles.len(), path.display());
        Ok(())
    }
}
