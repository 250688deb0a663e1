use serde::{Deserialize, Serialize};

/// One detected badge occurrence.
///
/// Field names match the persisted JSON shape. Records are built once by
/// the scanner and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRecord {
    /// Normalized display name, never empty ("Unknown Technology" fallback)
    pub technology: String,

    /// URL captured from the image reference, verbatim
    pub badge_url: String,

    /// The matched markdown image syntax, verbatim
    pub markdown: String,

    /// Raw alt text as written in the source (may be empty)
    pub alt_text: String,

    /// Originating document identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// 1-based line index within the source document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,

    /// Nearest enclosing heading at time of detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// A badge record together with the category the resolver assigned it.
///
/// The category is a grouping key, not part of the persisted record, so it
/// rides alongside rather than inside `BadgeRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedBadge {
    pub category: String,
    pub record: BadgeRecord,
}
