//! Category Resolver
//!
//! One resolver, three interchangeable policies: track markdown headings,
//! match a fixed taxonomy, or classify by technology keywords.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keywords::{self, KeywordLists};
use super::taxonomy::Taxonomy;

/// Section sentinel before any heading has been seen
pub const DEFAULT_SECTION: &str = "General";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,3} +(.+)$").expect("valid regex"));

/// Category assignment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Badges belong to the nearest preceding markdown heading;
    /// `DEFAULT_SECTION` before the first one
    #[default]
    HeadingTracking,
    /// Badges belong to the last recognized taxonomy category; badges
    /// before the first recognized category are dropped
    FixedTaxonomy,
    /// Badges are classified by their technology name against the
    /// keyword lists; headings only annotate the record
    KeywordClassification,
}

/// Tracks category context across one document scan.
///
/// Construction is cheap and the resolver is `Clone`; the scanner clones
/// it per document so a configured resolver can be shared across
/// documents (and threads) untouched.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    policy: CategoryPolicy,
    taxonomy: Taxonomy,
    keywords: KeywordLists,
    default_section: String,
    current_heading: Option<String>,
    current_taxonomy: Option<String>,
}

impl CategoryResolver {
    pub fn new(policy: CategoryPolicy) -> Self {
        Self {
            policy,
            taxonomy: Taxonomy::builtin(),
            keywords: KeywordLists::builtin(),
            default_section: DEFAULT_SECTION.to_string(),
            current_heading: None,
            current_taxonomy: None,
        }
    }

    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordLists) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_default_section(mut self, section: impl Into<String>) -> Self {
        self.default_section = section.into();
        self
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    /// Update category context from one document line.
    ///
    /// Heading state and taxonomy state advance independently; a line can
    /// update both. The same line is still scanned for badges afterwards.
    pub fn observe_line(&mut self, line: &str) {
        if let Some(caps) = HEADING_RE.captures(line) {
            self.current_heading = Some(caps[1].trim().to_string());
        }

        if self.policy == CategoryPolicy::FixedTaxonomy {
            if let Some(def) = self.taxonomy.match_line(line) {
                self.current_taxonomy = Some(def.key.clone());
            }
        }
    }

    /// Section annotation for a record detected now.
    ///
    /// `None` under the fixed-taxonomy policy, whose persisted records
    /// carry no section field.
    pub fn section(&self) -> Option<String> {
        match self.policy {
            CategoryPolicy::FixedTaxonomy => None,
            _ => Some(
                self.current_heading
                    .clone()
                    .unwrap_or_else(|| self.default_section.clone()),
            ),
        }
    }

    /// Category key for a badge with the given technology name, or `None`
    /// when the badge falls outside every category (fixed taxonomy before
    /// the first recognized heading).
    pub fn resolve(&self, technology: &str) -> Option<String> {
        match self.policy {
            CategoryPolicy::HeadingTracking => Some(
                self.current_heading
                    .clone()
                    .unwrap_or_else(|| self.default_section.clone()),
            ),
            CategoryPolicy::FixedTaxonomy => self.current_taxonomy.clone(),
            CategoryPolicy::KeywordClassification => {
                Some(self.keywords.classify(technology).to_string())
            }
        }
    }

    /// Display string for a category key produced by this resolver
    pub fn display_name(&self, key: &str) -> String {
        match self.policy {
            CategoryPolicy::HeadingTracking => key.to_string(),
            CategoryPolicy::FixedTaxonomy => self
                .taxonomy
                .display_name(key)
                .unwrap_or(key)
                .to_string(),
            CategoryPolicy::KeywordClassification => keywords::display_key(key),
        }
    }

    /// Keys to pre-seed zero counts with, where the policy has a closed
    /// category set
    pub fn seed_categories(&self) -> Option<Vec<String>> {
        match self.policy {
            CategoryPolicy::FixedTaxonomy => {
                Some(self.taxonomy.keys().iter().map(|k| k.to_string()).collect())
            }
            _ => None,
        }
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::new(CategoryPolicy::default())
    }
}
