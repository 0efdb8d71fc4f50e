use regex::Regex;
use url::Url;

use crate::error::CrawlError;
use crate::sites::SiteProfile;

/// Filters and normalizes hrefs discovered on index pages.
///
/// A candidate href passes when it belongs to the site (domain substring
/// check) and matches the profile's include patterns; it is then resolved
/// against the base URL, stripped of noise suffixes and fragments, and
/// returned as an absolute location string.
#[derive(Debug)]
pub struct LinkFilter {
    base: Url,
    domain: Option<&'static str>,
    strip_suffixes: &'static [&'static str],
    include_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Build the filter for one site's rule table
    pub fn from_profile(profile: &SiteProfile) -> Result<Self, CrawlError> {
        let mut include_regexes = Vec::with_capacity(profile.include_patterns.len());
        for pattern in profile.include_patterns {
            include_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            base: Url::parse(profile.base_url)?,
            domain: profile.domain,
            strip_suffixes: profile.strip_suffixes,
            include_regexes,
        })
    }

    /// Normalize an href into an absolute location, or reject it.
    ///
    /// Returns `None` for empty or fragment-only hrefs, hrefs outside the
    /// site's domain, and hrefs failing the include patterns. The caller
    /// decides how loudly to log the drop.
    pub fn accept(&self, href: &str) -> Option<String> {
        let mut href = href.trim().to_string();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }

        for suffix in self.strip_suffixes {
            href = href.replace(suffix, "");
        }

        if let Some(domain) = self.domain {
            if !href.contains(domain) {
                return None;
            }
        }

        // Resolves site-relative hrefs; absolute ones pass through unchanged
        let mut resolved = self.base.join(&href).ok()?;
        resolved.set_fragment(None);

        if !self.include_regexes.is_empty() {
            let resolved_str = resolved.as_str();
            if !self
                .include_regexes
                .iter()
                .any(|re| re.is_match(resolved_str))
            {
                return None;
            }
        }

        Some(resolved.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::{BAOMOI, VNEXPRESS};

    #[test]
    fn test_domain_substring_filter() {
        let filter = LinkFilter::from_profile(&VNEXPRESS).unwrap();

        let accepted = filter.accept("https://vnexpress.net/bong-da-4567.html");
        assert_eq!(
            accepted.as_deref(),
            Some("https://vnexpress.net/bong-da-4567.html")
        );

        // Off-domain hrefs are rejected
        assert!(
            filter
                .accept("https://other.example.com/story.html")
                .is_none()
        );
    }

    #[test]
    fn test_noise_suffix_stripped() {
        let filter = LinkFilter::from_profile(&VNEXPRESS).unwrap();

        let accepted = filter.accept("https://vnexpress.net/tin-123.html#box_comment_vne");
        assert_eq!(
            accepted.as_deref(),
            Some("https://vnexpress.net/tin-123.html")
        );
    }

    #[test]
    fn test_fragment_only_href_rejected() {
        let filter = LinkFilter::from_profile(&VNEXPRESS).unwrap();
        assert!(filter.accept("#comments").is_none());
        assert!(filter.accept("").is_none());
    }

    #[test]
    fn test_relative_href_resolved_against_base() {
        let filter = LinkFilter::from_profile(&BAOMOI).unwrap();

        let accepted = filter.accept("/tin-tuc/chuyen-muc-51234.epi");
        assert_eq!(
            accepted.as_deref(),
            Some("https://baomoi.com/tin-tuc/chuyen-muc-51234.epi")
        );
    }

    #[test]
    fn test_include_patterns_restrict_matches() {
        let patterned = crate::sites::SiteProfile {
            include_patterns: &[r"-\d+\.html$"],
            ..VNEXPRESS
        };
        let filter = LinkFilter::from_profile(&patterned).unwrap();

        assert!(filter.accept("https://vnexpress.net/tin-123.html").is_some());
        assert!(filter.accept("https://vnexpress.net/video/clip").is_none());
    }

    #[test]
    fn test_fragment_removed_during_normalization() {
        let filter = LinkFilter::from_profile(&BAOMOI).unwrap();

        let accepted = filter.accept("/tin-51234.epi#top");
        assert_eq!(
            accepted.as_deref(),
            Some("https://baomoi.com/tin-51234.epi")
        );
    }
}
