//! Field extraction from fetched article pages.
//!
//! One generic extractor walks the per-site rule table: every field is a
//! prioritized list of selectors with a documented fallback, except the
//! title, whose absence skips the whole record.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::Skip;
use crate::sites::SiteProfile;

/// A normalized news article.
///
/// The serialized keys (`title`, `url`, `cat`, `desc`, `detail`, `label`)
/// are the on-disk contract of `{stem}.json`; `label` is attached later by
/// a human operator and omitted until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    /// Category breadcrumb text, empty when the page has none
    pub cat: String,
    /// Lead/summary paragraph, empty when the page has none
    pub desc: String,
    /// Body paragraphs joined with single spaces
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ArticleRecord {
    /// Whether a human operator has already labeled this record
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }
}

/// Extract one article record from a fetched page.
///
/// Returns `Err(Skip)` when the page matches the site's excluded-content
/// rule or carries no title; every other missing field falls back to an
/// empty string.
pub fn extract(profile: &SiteProfile, url: &str, html: &str) -> Result<ArticleRecord, Skip> {
    let doc = Html::parse_document(html);

    if let Some(rule) = &profile.excluded_content {
        let selector = Selector::parse(rule.selector).unwrap();
        if let Some(element) = doc.select(&selector).next() {
            if element_text(&element) == rule.text {
                return Err(Skip::ExcludedContent);
            }
        }
    }

    let title = first_match(&doc, profile.title_selectors).ok_or(Skip::MissingTitle)?;

    let cat_selector = Selector::parse(profile.category_selector).unwrap();
    let cat = doc
        .select(&cat_selector)
        .next()
        .map(|e| element_text(&e))
        .unwrap_or_default();

    let desc = first_match(&doc, profile.summary_selectors).unwrap_or_default();

    let body_selector = Selector::parse(profile.body_selector).unwrap();
    let detail = doc
        .select(&body_selector)
        .map(|e| element_text(&e))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(ArticleRecord {
        title,
        url: url.to_string(),
        cat,
        desc,
        detail,
        label: None,
    })
}

/// Try each selector in order and return the first element's trimmed text
fn first_match(doc: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let selector = Selector::parse(raw).unwrap();
        if let Some(element) = doc.select(&selector).next() {
            return Some(element_text(&element));
        }
    }
    None
}

/// Concatenated descendant text with surrounding whitespace trimmed
fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::{BAOMOI, VNEXPRESS};

    fn vne_page(title_block: &str, body_blocks: &str) -> String {
        format!(
            r#"<html><body>
                <ul class="breadcrumb"><li><a>Thời sự</a></li><li><a>Giao thông</a></li></ul>
                {title_block}
                <p class="description">Tóm tắt bài viết.</p>
                <article class="fck_detail">{body_blocks}</article>
            </body></html>"#
        )
    }

    #[test]
    fn test_extract_full_record() {
        let html = vne_page(
            r#"<h1 class="title-detail"> Tiêu đề chính </h1>"#,
            r#"<p class="Normal">Đoạn một.</p><p class="Normal"> Đoạn hai. </p>"#,
        );
        let record = extract(&VNEXPRESS, "https://vnexpress.net/x-1.html", &html).unwrap();

        assert_eq!(record.title, "Tiêu đề chính");
        assert_eq!(record.cat, "Thời sự");
        assert_eq!(record.desc, "Tóm tắt bài viết.");
        assert_eq!(record.detail, "Đoạn một. Đoạn hai.");
        assert_eq!(record.url, "https://vnexpress.net/x-1.html");
        assert!(record.label.is_none());
    }

    #[test]
    fn test_missing_title_skips_record() {
        let html = vne_page("", r#"<p class="Normal">Đoạn một.</p>"#);
        let result = extract(&VNEXPRESS, "https://vnexpress.net/x-1.html", &html);
        assert_eq!(result.unwrap_err(), Skip::MissingTitle);
    }

    #[test]
    fn test_empty_body_yields_empty_string() {
        let html = vne_page(r#"<h1 class="title-detail">Tiêu đề</h1>"#, "");
        let record = extract(&VNEXPRESS, "https://vnexpress.net/x-1.html", &html).unwrap();
        assert_eq!(record.detail, "");
    }

    #[test]
    fn test_missing_category_and_summary_default_to_empty() {
        let html = r#"<html><body><h1 class="title-detail">Tiêu đề</h1></body></html>"#;
        let record = extract(&VNEXPRESS, "https://vnexpress.net/x-1.html", html).unwrap();
        assert_eq!(record.cat, "");
        assert_eq!(record.desc, "");
    }

    #[test]
    fn test_podcast_page_excluded() {
        let html = r#"<html><body>
            <div class="title-folder"><a> Podcasts </a></div>
            <h1 class="title-detail">Tập mới</h1>
        </body></html>"#;
        let result = extract(&VNEXPRESS, "https://vnexpress.net/podcast-1.html", html);
        assert_eq!(result.unwrap_err(), Skip::ExcludedContent);
    }

    #[test]
    fn test_summary_fallback_selector() {
        let html = r#"<html><body>
            <h1 class="title-detail">Tiêu đề</h1>
            <p class="lead_detail">Tóm tắt dự phòng</p>
        </body></html>"#;
        let record = extract(&VNEXPRESS, "https://vnexpress.net/x-1.html", html).unwrap();
        assert_eq!(record.desc, "Tóm tắt dự phòng");
    }

    #[test]
    fn test_baomoi_body_excludes_related_paragraphs() {
        let html = r#"<html><body>
            <div class="bm_AX"><h1 class="bm_F">Tin BaoMoi</h1></div>
            <p class="bm_AS">Nội dung chính.</p>
            <p class="bm_AS bm_RM">Tin liên quan.</p>
        </body></html>"#;
        let record = extract(&BAOMOI, "https://baomoi.com/tin-1.epi", html).unwrap();
        assert_eq!(record.title, "Tin BaoMoi");
        assert_eq!(record.detail, "Nội dung chính.");
    }

    #[test]
    fn test_label_round_trips_through_json() {
        let mut record = extract(
            &VNEXPRESS,
            "https://vnexpress.net/x-1.html",
            &vne_page(r#"<h1 class="title-detail">Tiêu đề</h1>"#, ""),
        )
        .unwrap();

        // label key is absent until an operator sets it
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("label"));

        record.label = Some("sports".to_string());
        let json = serde_json::to_string(&record).unwrap();
        let back: ArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
