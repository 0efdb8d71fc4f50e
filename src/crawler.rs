//! The crawl driver: discovery, extraction, persistence.
//!
//! One invocation is strictly sequential. The persisted article file is an
//! authoritative cached result: when it exists the driver returns it
//! without touching the network.

use std::collections::HashSet;

use crate::config::CrawlerConfig;
use crate::error::CrawlError;
use crate::extract::{self, ArticleRecord};
use crate::fetch::Fetch;
use crate::frontier;
use crate::sites::{Discovery, Site};
use crate::store::Store;

/// Discover article locations for a site and persist the result.
///
/// The fresh set is unioned with any previously persisted frontier set,
/// so repeated invocations accumulate locations instead of re-discovering
/// from scratch.
pub async fn discover_locations<F: Fetch>(
    config: &CrawlerConfig,
    site: Site,
    fetcher: &mut F,
) -> Result<HashSet<String>, CrawlError> {
    let profile = site.profile();
    let store = Store::new(&config.data_dir);

    let fresh = match profile.discovery {
        Discovery::Frontier { seed } => {
            frontier::expand(fetcher, profile, seed, config.limit, config.recursive).await?
        }
        Discovery::Paginated {
            page_template,
            guard_selector,
        } => {
            frontier::expand_paginated(fetcher, profile, page_template, guard_selector, config.limit)
                .await?
        }
    };

    let mut urls = store.load_urls(profile.stem)?.unwrap_or_default();
    urls.extend(fresh);
    store.save_urls(profile.stem, &urls)?;
    Ok(urls)
}

/// Crawl one site: reuse the cached article collection if present,
/// otherwise fetch every known location and extract records.
pub async fn run<F: Fetch>(
    config: &CrawlerConfig,
    site: Site,
    fetcher: &mut F,
) -> Result<Vec<ArticleRecord>, CrawlError> {
    let profile = site.profile();
    let store = Store::new(&config.data_dir);

    if let Some(articles) = store.load_articles(profile.stem)? {
        ::log::info!(
            "Found cached collection of {} articles for {}, skipping crawl",
            articles.len(),
            site
        );
        return Ok(articles);
    }

    let urls = match store.load_urls(profile.stem)? {
        Some(urls) if !urls.is_empty() => urls,
        _ => discover_locations(config, site, fetcher).await?,
    };
    ::log::info!("Extracting {} locations for {}", urls.len(), site);

    let mut articles = Vec::new();
    let mut skipped = 0usize;
    for url in &urls {
        let html = match fetcher.fetch(url).await {
            Ok(html) => html,
            Err(CrawlError::FetchTimeout(timed_out)) => {
                if config.abort_on_timeout {
                    ::log::warn!(
                        "Fetch timed out at {}, aborting remaining batch with {} records",
                        timed_out,
                        articles.len()
                    );
                    break;
                }
                ::log::warn!("Fetch timed out at {}, skipping location", timed_out);
                continue;
            }
            Err(e) => return Err(e),
        };

        match extract::extract(profile, url, &html) {
            Ok(record) => articles.push(record),
            Err(skip) => {
                skipped += 1;
                ::log::info!("Skipping {}: {}", url, skip);
            }
        }
    }

    ::log::info!(
        "Extraction for {} done: {} records, {} skipped",
        site,
        articles.len(),
        skipped
    );
    store.save_articles(profile.stem, &articles)?;
    Ok(articles)
}
