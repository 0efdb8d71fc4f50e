//! Declarative per-site scraping rules.
//!
//! Each supported news site is described by a [`SiteProfile`]: which anchors
//! on an index page lead to articles, how discovered locations are cleaned
//! up, and which selectors produce each field of an article record. The
//! crawl driver and the extractor are generic over the profile, so adding a
//! site means adding a table here, not new control flow.

use serde::{Deserialize, Serialize};

/// How a site's article locations are discovered
#[derive(Debug, Clone, Copy)]
pub enum Discovery {
    /// Start from a seed page and optionally expand the link frontier
    /// until a size limit or a fixed point is reached
    Frontier { seed: &'static str },
    /// Walk numbered index pages (`{page}` in the template is replaced
    /// with 1, 2, ...) until the guard selector stops matching
    Paginated {
        page_template: &'static str,
        guard_selector: &'static str,
    },
}

/// A rule matching pages that must not become records
#[derive(Debug, Clone, Copy)]
pub struct ExcludedContentRule {
    /// Selector for the element carrying the content-type marker
    pub selector: &'static str,
    /// Trimmed text that marks the page as excluded
    pub text: &'static str,
}

/// Complete scraping rule table for one site
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    /// Stem for the persisted files (`{stem}_url.json`, `{stem}.json`)
    pub stem: &'static str,
    /// Base URL used to resolve site-relative hrefs
    pub base_url: &'static str,
    /// Substring a discovered href must contain to belong to the site;
    /// `None` accepts any href resolvable against the base URL
    pub domain: Option<&'static str>,
    /// Selector for article anchors on index pages
    pub link_selector: &'static str,
    /// Noise suffixes removed from discovered locations
    pub strip_suffixes: &'static [&'static str],
    /// Regex patterns a location must match (empty = accept all)
    pub include_patterns: &'static [&'static str],
    pub discovery: Discovery,
    /// Pre-check that skips non-article pages, if the site needs one
    pub excluded_content: Option<ExcludedContentRule>,
    /// Ordered candidates for the required title field
    pub title_selectors: &'static [&'static str],
    /// First match wins; absence yields an empty category
    pub category_selector: &'static str,
    /// Ordered candidates for the summary field
    pub summary_selectors: &'static [&'static str],
    /// All matches are joined into the body text
    pub body_selector: &'static str,
}

/// VnExpress: frontier-expanded discovery from the homepage.
pub static VNEXPRESS: SiteProfile = SiteProfile {
    stem: "vne",
    base_url: "https://vnexpress.net/",
    domain: Some("vnexpress.net/"),
    link_selector: "h3.title-news a",
    strip_suffixes: &["#box_comment_vne"],
    include_patterns: &[],
    discovery: Discovery::Frontier {
        seed: "https://vnexpress.net/",
    },
    excluded_content: Some(ExcludedContentRule {
        selector: "div.title-folder a",
        text: "Podcasts",
    }),
    title_selectors: &["h1.title-detail"],
    category_selector: "ul.breadcrumb li:nth-of-type(1) a",
    summary_selectors: &["p.description", "p.lead_detail"],
    body_selector: "article.fck_detail p.Normal",
};

/// BaoMoi: paginated discovery over numbered index pages. Anchors are
/// site-relative, so records carry the href joined onto the base URL.
pub static BAOMOI: SiteProfile = SiteProfile {
    stem: "bm",
    base_url: "https://baomoi.com",
    domain: None,
    link_selector: "div.bm_w h3.bm_F a",
    strip_suffixes: &[],
    include_patterns: &[],
    discovery: Discovery::Paginated {
        page_template: "https://baomoi.com/trang{page}.epi",
        guard_selector: "div.bm_q div.bm_w h3.bm_F a",
    },
    excluded_content: None,
    title_selectors: &["div.bm_AX h1.bm_F"],
    category_selector: "div.bm_T a.bm_U:nth-of-type(1)",
    summary_selectors: &["div.bm_AX h3.bm_F.bm_x"],
    body_selector: "p.bm_AS:not(.bm_RM)",
};

/// Supported news sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Site {
    VnExpress,
    BaoMoi,
}

impl Site {
    /// The scraping rule table for this site
    pub fn profile(self) -> &'static SiteProfile {
        match self {
            Site::VnExpress => &VNEXPRESS,
            Site::BaoMoi => &BAOMOI,
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Site::VnExpress => write!(f, "vnexpress"),
            Site::BaoMoi => write!(f, "baomoi"),
        }
    }
}
