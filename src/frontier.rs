//! Article location discovery.
//!
//! Two strategies, selected by the site profile: breadth-first frontier
//! expansion from a seed page, and a walk over numbered index pages. Both
//! produce a deduplicated set of normalized absolute locations.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::CrawlError;
use crate::fetch::Fetch;
use crate::filter::LinkFilter;
use crate::sites::SiteProfile;

/// Collect every acceptable article link from one page's markup.
///
/// Anchors without an href and hrefs the filter rejects are dropped with
/// a warning, never treated as fatal.
pub fn discover_links(
    profile: &SiteProfile,
    filter: &LinkFilter,
    html: &str,
) -> HashSet<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(profile.link_selector).unwrap();

    let mut links = HashSet::new();
    for anchor in doc.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            ::log::warn!("Dropping anchor without href on {} index page", profile.stem);
            continue;
        };
        match filter.accept(href) {
            Some(location) => {
                links.insert(location);
            }
            None => {
                ::log::warn!("Dropping invalid article link: {}", href);
            }
        }
    }
    links
}

/// Expand the link frontier from a seed location.
///
/// Non-recursive mode returns the seed's direct-link set. Recursive mode
/// keeps two sets, `discovered` (the accumulated result) and `frontier`
/// (locations not yet expanded), and loops until `discovered` reaches the
/// limit or the frontier empties (fixed point). The limit is checked
/// before each round, not after, so the result may exceed it by one
/// round's worth of links.
pub async fn expand<F: Fetch>(
    fetcher: &mut F,
    profile: &SiteProfile,
    seed: &str,
    limit: usize,
    recursive: bool,
) -> Result<HashSet<String>, CrawlError> {
    let filter = LinkFilter::from_profile(profile)?;

    let html = fetcher.fetch(seed).await?;
    let mut discovered = discover_links(profile, &filter, &html);
    ::log::info!("Seed {} yielded {} article links", seed, discovered.len());

    if !recursive {
        return Ok(discovered);
    }

    let mut frontier = discovered.clone();
    while discovered.len() < limit && !frontier.is_empty() {
        let mut newly_found = HashSet::new();
        for location in &frontier {
            let html = fetcher.fetch(location).await?;
            newly_found.extend(discover_links(profile, &filter, &html));
        }

        frontier = newly_found.difference(&discovered).cloned().collect();
        discovered.extend(newly_found);
        ::log::info!(
            "Frontier round done: {} discovered, {} pending expansion",
            discovered.len(),
            frontier.len()
        );
    }

    Ok(discovered)
}

/// Walk numbered index pages until the guard selector stops matching or
/// enough locations have been collected.
pub async fn expand_paginated<F: Fetch>(
    fetcher: &mut F,
    profile: &SiteProfile,
    page_template: &str,
    guard_selector: &str,
    limit: usize,
) -> Result<HashSet<String>, CrawlError> {
    let filter = LinkFilter::from_profile(profile)?;
    let guard = Selector::parse(guard_selector).unwrap();

    let mut discovered = HashSet::new();
    let mut page = 1usize;
    while discovered.len() < limit {
        let url = page_template.replace("{page}", &page.to_string());
        let html = fetcher.fetch(&url).await?;

        // An index page past the end has no article anchors at all
        let doc = Html::parse_document(&html);
        if doc.select(&guard).next().is_none() {
            ::log::info!("Index page {} is empty, stopping pagination", page);
            break;
        }
        drop(doc);

        discovered.extend(discover_links(profile, &filter, &html));
        ::log::info!(
            "Index page {} done, {} locations collected",
            page,
            discovered.len()
        );
        page += 1;
    }

    Ok(discovered)
}
