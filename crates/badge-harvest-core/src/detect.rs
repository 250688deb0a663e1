//! Badge Detector
//!
//! Decides whether a matched image reference is a badge or an ordinary
//! (decorative) image. Pure predicate, no side effects.

use serde::{Deserialize, Serialize};

/// URL substrings that identify badge-hosting services
pub const DEFAULT_URL_INDICATORS: &[&str] = &[
    "shields.io",
    "badge",
    "img.shields",
    "badges",
    "travis-ci",
    "github.io",
    "coveralls",
    "codacy",
    "version",
    "license",
    "downloads",
    "stars",
];

/// Alt-text substrings that identify badge semantics
pub const DEFAULT_ALT_KEYWORDS: &[&str] = &["badge", "version", "license", "build", "coverage"];

/// URL substrings consulted for the short-alt-text clause
pub const DEFAULT_SHORT_ALT_SERVICES: &[&str] = &["shields", "badge"];

/// Alt texts shorter than this may qualify via the service-URL clause alone
pub const DEFAULT_SHORT_ALT_LIMIT: usize = 30;

/// Runtime detector configuration.
///
/// Built from the builtin lists, optionally overridden from the config
/// file. All matching is case-insensitive substring containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// URL substrings that mark an image as a badge
    #[serde(default = "default_url_indicators")]
    pub url_indicators: Vec<String>,

    /// Alt-text substrings that mark an image as a badge
    #[serde(default = "default_alt_keywords")]
    pub alt_keywords: Vec<String>,

    /// Service substrings used together with the short-alt clause
    #[serde(default = "default_short_alt_services")]
    pub short_alt_services: Vec<String>,

    /// Maximum alt-text length for the short-alt clause (exclusive)
    #[serde(default = "default_short_alt_limit")]
    pub short_alt_limit: usize,
}

fn default_url_indicators() -> Vec<String> {
    DEFAULT_URL_INDICATORS.iter().map(|s| s.to_string()).collect()
}

fn default_alt_keywords() -> Vec<String> {
    DEFAULT_ALT_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

fn default_short_alt_services() -> Vec<String> {
    DEFAULT_SHORT_ALT_SERVICES.iter().map(|s| s.to_string()).collect()
}

fn default_short_alt_limit() -> usize {
    DEFAULT_SHORT_ALT_LIMIT
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            url_indicators: default_url_indicators(),
            alt_keywords: default_alt_keywords(),
            short_alt_services: default_short_alt_services(),
            short_alt_limit: default_short_alt_limit(),
        }
    }
}

impl DetectorConfig {
    /// Whether an image reference looks like a badge.
    ///
    /// Disjunction of three clauses: a badge-service indicator in the URL,
    /// a badge keyword in the alt text, or a short alt text combined with a
    /// badge-service URL. No clause matching means the image is decorative.
    pub fn is_badge(&self, url: &str, alt_text: &str) -> bool {
        let url_lower = url.to_lowercase();
        let alt_lower = alt_text.to_lowercase();

        if self.url_indicators.iter().any(|i| url_lower.contains(i.as_str())) {
            return true;
        }

        if self.alt_keywords.iter().any(|k| alt_lower.contains(k.as_str())) {
            return true;
        }

        alt_text.chars().count() < self.short_alt_limit
            && self
                .short_alt_services
                .iter()
                .any(|s| url_lower.contains(s.as_str()))
    }
}
