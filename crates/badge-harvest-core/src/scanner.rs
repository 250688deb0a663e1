//! Markdown Scanner
//!
//! Walks a document line by line, tracks category context through the
//! resolver, and turns image references that pass the badge detector into
//! `BadgeRecord`s. A table-mode entry point handles documents that list
//! badges as markdown table rows instead of inline references.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::CategoryResolver;
use crate::detect::DetectorConfig;
use crate::namer::NamerConfig;
use crate::record::{BadgeRecord, ScannedBadge};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid regex"));
static TABLE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^### +(.+)$").expect("valid regex"));
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Badge scanner, parameterized by detector and namer configuration.
///
/// Scanning is a pure function of (document text, initial resolver
/// state): the resolver is cloned per call, so one configured scanner and
/// resolver pair can serve any number of documents, in any order.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    detector: DetectorConfig,
    namer: NamerConfig,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector(mut self, detector: DetectorConfig) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_namer(mut self, namer: NamerConfig) -> Self {
        self.namer = namer;
        self
    }

    /// Scan a document for inline badge references.
    ///
    /// Returns records in document order. All image references on a line
    /// are considered independently; references without a URL, references
    /// the detector rejects, and badges the resolver leaves uncategorized
    /// (fixed taxonomy before its first heading) are skipped silently.
    pub fn scan(
        &self,
        content: &str,
        source_file: &str,
        resolver: &CategoryResolver,
    ) -> Vec<ScannedBadge> {
        let mut resolver = resolver.clone();
        let mut badges = Vec::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line_number = idx + 1;
            let line = raw_line.trim();

            resolver.observe_line(line);

            for caps in IMAGE_RE.captures_iter(line) {
                let alt_text = &caps[1];
                let badge_url = &caps[2];

                if badge_url.is_empty() || !self.detector.is_badge(badge_url, alt_text) {
                    continue;
                }

                let image_offset = caps.get(0).map_or(0, |m| m.start());
                let technology = self
                    .namer
                    .name_for_in_line(alt_text, Some((line, image_offset)));

                let Some(category) = resolver.resolve(&technology) else {
                    continue;
                };

                badges.push(ScannedBadge {
                    category,
                    record: BadgeRecord {
                        technology,
                        badge_url: badge_url.to_string(),
                        markdown: caps[0].to_string(),
                        alt_text: alt_text.to_string(),
                        source_file: source_id(source_file),
                        line_number: Some(line_number),
                        section: resolver.section(),
                    },
                });
            }
        }

        badges
    }

    /// Scan a document whose badges are laid out as markdown table rows.
    ///
    /// Each `###` heading names a category; data rows (everything after
    /// the two-row table header) yield one record each. The URL comes from
    /// an embedded image reference in the second cell, or the cell's
    /// trimmed text when no image syntax is present. Rows without a name
    /// or URL are skipped, as are tables outside any category heading.
    pub fn scan_tables(&self, content: &str, source_file: &str) -> Vec<ScannedBadge> {
        let mut badges = Vec::new();
        let mut current_category: Option<String> = None;
        let mut rows_in_block = 0usize;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_number = idx + 1;
            let line = raw_line.trim();

            if let Some(caps) = TABLE_HEADING_RE.captures(line) {
                current_category = Some(caps[1].trim().to_string());
                rows_in_block = 0;
                continue;
            }

            if !line.starts_with('|') || !line.ends_with('|') {
                rows_in_block = 0;
                continue;
            }

            rows_in_block += 1;
            if rows_in_block <= 2 {
                // Header row and separator row
                continue;
            }

            let Some(category) = current_category.clone() else {
                continue;
            };

            let cells: Vec<&str> = line.split('|').map(str::trim).collect();
            if cells.len() < 5 {
                // Leading and trailing empties plus at least three cells
                continue;
            }
            let name = cells[1];
            let url_cell = cells[2];
            let markdown_cell = cells[3].trim_matches('`');

            let (badge_url, alt_text) = extract_cell_url(url_cell);
            if name.is_empty() || badge_url.is_empty() {
                continue;
            }

            badges.push(ScannedBadge {
                category,
                record: BadgeRecord {
                    technology: name.to_string(),
                    badge_url,
                    markdown: markdown_cell.to_string(),
                    alt_text,
                    source_file: source_id(source_file),
                    line_number: Some(line_number),
                    section: None,
                },
            });
        }

        badges
    }
}

fn source_id(source_file: &str) -> Option<String> {
    if source_file.is_empty() {
        None
    } else {
        Some(source_file.to_string())
    }
}

/// URL and alt text from a table cell: embedded image reference if
/// present, otherwise the cell's text with any HTML tags stripped.
fn extract_cell_url(cell: &str) -> (String, String) {
    let cell = HTML_TAG_RE.replace_all(cell, "");
    match IMAGE_RE.captures(&cell) {
        Some(caps) => (caps[2].to_string(), caps[1].to_string()),
        None => (cell.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryPolicy;

    fn scan(content: &str, policy: CategoryPolicy) -> Vec<ScannedBadge> {
        let scanner = Scanner::new();
        let resolver = CategoryResolver::new(policy);
        scanner.scan(content, "README.md", &resolver)
    }

    #[test]
    fn test_detects_shields_badge() {
        let hits = scan(
            "![Python](https://img.shields.io/badge/Python-blue)",
            CategoryPolicy::HeadingTracking,
        );
        assert_eq!(hits.len(), 1);
        let record = &hits[0].record;
        assert_eq!(record.technology, "Python");
        assert_eq!(record.badge_url, "https://img.shields.io/badge/Python-blue");
        assert_eq!(
            record.markdown,
            "![Python](https://img.shields.io/badge/Python-blue)"
        );
        assert_eq!(record.line_number, Some(1));
        assert_eq!(record.source_file.as_deref(), Some("README.md"));
    }

    #[test]
    fn test_ignores_decorative_image() {
        let hits = scan(
            "![Screenshot](./images/screenshot.png)",
            CategoryPolicy::HeadingTracking,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_skips_reference_without_url() {
        let hits = scan("![badge]()", CategoryPolicy::HeadingTracking);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_multiple_badges_on_one_line() {
        let line = "![Go](https://img.shields.io/badge/Go-cyan) ![Rust](https://img.shields.io/badge/Rust-orange)";
        let hits = scan(line, CategoryPolicy::HeadingTracking);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record.technology, "Go");
        assert_eq!(hits[1].record.technology, "Rust");
        assert_eq!(hits[1].record.line_number, Some(1));
    }

    #[test]
    fn test_heading_tracking_groups_by_section() {
        let content = "## Languages\n![Go](https://img.shields.io/badge/Go-cyan)\n## Tools\n![Git](https://img.shields.io/badge/Git-orange)";
        let hits = scan(content, CategoryPolicy::HeadingTracking);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, "Languages");
        assert_eq!(hits[0].record.section.as_deref(), Some("Languages"));
        assert_eq!(hits[1].category, "Tools");
        assert_eq!(hits[1].record.line_number, Some(4));
    }

    #[test]
    fn test_badge_before_any_heading_lands_in_default_section() {
        let hits = scan(
            "![Rust](https://img.shields.io/badge/Rust-orange)\n# Title",
            CategoryPolicy::HeadingTracking,
        );
        assert_eq!(hits[0].category, "General");
    }

    #[test]
    fn test_fixed_taxonomy_drops_unheaded_badges() {
        let content = "![Python](https://img.shields.io/badge/Python-blue)\n### Languages\n![Go](https://img.shields.io/badge/Go-cyan)";
        let hits = scan(content, CategoryPolicy::FixedTaxonomy);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "languages");
        assert_eq!(hits[0].record.technology, "Go");
        assert_eq!(hits[0].record.section, None);
    }

    #[test]
    fn test_keyword_policy_classifies_by_name() {
        let content = "## Stack\n![React](https://img.shields.io/badge/React-blue)\n![Twitter](https://img.shields.io/badge/Twitter-blue)";
        let hits = scan(content, CategoryPolicy::KeywordClassification);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, "frameworks");
        assert_eq!(hits[1].category, "social");
        assert_eq!(hits[0].record.section.as_deref(), Some("Stack"));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let content = "## A\n![Go](https://img.shields.io/badge/Go-cyan)\n## B\n![Rust](https://img.shields.io/badge/Rust-orange)";
        let first = scan(content, CategoryPolicy::HeadingTracking);
        let second = scan(content, CategoryPolicy::HeadingTracking);
        assert_eq!(first, second);
    }

    #[test]
    fn test_url_is_captured_verbatim() {
        let url = "https://img.shields.io/badge/c%2B%2B-blue?style=for-the-badge&logo=cplusplus";
        let hits = scan(
            &format!("![badge]({url})"),
            CategoryPolicy::HeadingTracking,
        );
        assert_eq!(hits[0].record.badge_url, url);
    }

    #[test]
    fn test_table_mode_extracts_rows() {
        let content = "\
### Languages

| Name | Badge | Markdown |
| --- | --- | --- |
| Python | ![Python](https://img.shields.io/badge/python-blue) | `![Python](https://img.shields.io/badge/python-blue)` |
| Rust | https://img.shields.io/badge/rust-orange | `![Rust](https://img.shields.io/badge/rust-orange)` |
";
        let scanner = Scanner::new();
        let hits = scanner.scan_tables(content, "README.md");
        assert_eq!(hits.len(), 2);

        assert_eq!(hits[0].category, "Languages");
        assert_eq!(hits[0].record.technology, "Python");
        assert_eq!(
            hits[0].record.badge_url,
            "https://img.shields.io/badge/python-blue"
        );
        assert_eq!(hits[0].record.alt_text, "Python");

        // No image syntax in the cell: trimmed text is the URL
        assert_eq!(
            hits[1].record.badge_url,
            "https://img.shields.io/badge/rust-orange"
        );
        assert_eq!(hits[1].record.alt_text, "");
    }

    #[test]
    fn test_table_mode_skips_incomplete_rows() {
        let content = "\
### Languages

| Name | Badge | Markdown |
| --- | --- | --- |
|  | ![x](https://img.shields.io/x) | `![x](https://img.shields.io/x)` |
| NoUrl |  | `` |
";
        let scanner = Scanner::new();
        let hits = scanner.scan_tables(content, "");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_table_mode_ignores_tables_without_category() {
        let content = "\
| Name | Badge | Markdown |
| --- | --- | --- |
| Python | ![Python](https://img.shields.io/badge/python-blue) | `x` |
";
        let scanner = Scanner::new();
        assert!(scanner.scan_tables(content, "").is_empty());
    }

    #[test]
    fn test_table_mode_strips_html_from_url_cell() {
        let content = "\
### Browsers

| Name | Badge | Markdown |
| --- | --- | --- |
| Firefox | <img src=\"x\"> https://img.shields.io/badge/firefox-orange | `![Firefox](https://img.shields.io/badge/firefox-orange)` |
";
        let scanner = Scanner::new();
        let hits = scanner.scan_tables(content, "");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].record.badge_url,
            "https://img.shields.io/badge/firefox-orange"
        );
    }
}
