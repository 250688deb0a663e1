//! Technology Namer
//!
//! Derives a normalized, human-presentable technology name from a badge's
//! alt text. Always returns a non-empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fallback when no usable name can be derived
pub const UNKNOWN_TECHNOLOGY: &str = "Unknown Technology";

/// Substrings deleted from alt text before normalization.
///
/// Deletion is sequential in list order, not word-boundary-aware, so
/// "badge" is removed out of "for-the-badge" before the longer entry is
/// ever consulted. That matches the established output.
pub const DEFAULT_STOPLIST: &[&str] = &[
    "badge",
    "icon",
    "logo",
    "shield",
    "style",
    "for-the-badge",
    "version",
    "license",
    "build",
    "coverage",
    "status",
    "downloads",
];

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("valid regex"));
static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("valid regex"));

/// Runtime namer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamerConfig {
    /// Stoplist applied to lower-cased alt text, in order
    #[serde(default = "default_stoplist")]
    pub stoplist: Vec<String>,
}

fn default_stoplist() -> Vec<String> {
    DEFAULT_STOPLIST.iter().map(|s| s.to_string()).collect()
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            stoplist: default_stoplist(),
        }
    }
}

impl NamerConfig {
    /// Derive a technology name from alt text alone.
    pub fn name_for(&self, alt_text: &str) -> String {
        self.name_for_in_line(alt_text, None)
    }

    /// Derive a technology name, with the surrounding line as fallback
    /// context.
    ///
    /// `context` is the full source line plus the byte offset at which the
    /// image reference starts; when normalization yields nothing usable,
    /// the nearest bracket-delimited label ending before that offset is
    /// tried before giving up.
    pub fn name_for_in_line(&self, alt_text: &str, context: Option<(&str, usize)>) -> String {
        let normalized = self.normalize(alt_text);

        if normalized.chars().count() >= 2 {
            return capitalize_words(&normalized);
        }

        if let Some((line, image_offset)) = context {
            if let Some(label) = bracket_label_before(line, image_offset) {
                return capitalize_words(&label);
            }
        }

        UNKNOWN_TECHNOLOGY.to_string()
    }

    /// Lower-case, delete stoplist entries, strip non-word characters,
    /// collapse separator runs, trim.
    fn normalize(&self, alt_text: &str) -> String {
        let mut name = alt_text.to_lowercase();
        for word in &self.stoplist {
            name = name.replace(word.as_str(), "");
        }

        let name = NON_WORD_RE.replace_all(&name, "");
        let name = SEPARATOR_RE.replace_all(&name, " ");
        name.trim().to_string()
    }
}

/// Preceding `[...]` label on the same line, if any non-empty one exists.
fn bracket_label_before(line: &str, image_offset: usize) -> Option<String> {
    BRACKET_RE
        .captures_iter(line)
        .filter(|caps| caps.get(0).map_or(false, |m| m.end() <= image_offset))
        .last()
        .map(|caps| caps[1].trim().to_string())
        .filter(|label| !label.is_empty())
}

/// First letter of each word upper-cased, the rest lower-cased.
fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_alt_text() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for("Python"), "Python");
    }

    #[test]
    fn test_stoplist_words_removed() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for("Python Badge"), "Python");
        assert_eq!(namer.name_for("rust-logo"), "Rust");
    }

    #[test]
    fn test_multi_word_capitalization() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for("visual studio code"), "Visual Studio Code");
    }

    #[test]
    fn test_empty_alt_yields_sentinel() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for(""), UNKNOWN_TECHNOLOGY);
    }

    #[test]
    fn test_alt_consumed_by_stoplist_yields_sentinel() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for("build-status"), UNKNOWN_TECHNOLOGY);
        assert_eq!(namer.name_for("badge"), UNKNOWN_TECHNOLOGY);
    }

    #[test]
    fn test_never_returns_empty() {
        let namer = NamerConfig::default();
        for alt in ["", " ", "!!", "-", "x", "logo-icon", "日本語"] {
            assert!(!namer.name_for(alt).is_empty(), "empty name for {:?}", alt);
        }
    }

    #[test]
    fn test_bracket_fallback_from_line() {
        let namer = NamerConfig::default();
        let line = "| [PyTorch] | ![x](https://img.shields.io/badge/x-red) |";
        let offset = line.find("![").unwrap();
        assert_eq!(namer.name_for_in_line("x", Some((line, offset))), "Pytorch");
    }

    #[test]
    fn test_bracket_after_image_is_ignored() {
        let namer = NamerConfig::default();
        let line = "![x](url) [caption]";
        assert_eq!(
            namer.name_for_in_line("x", Some((line, 0))),
            UNKNOWN_TECHNOLOGY
        );
    }

    #[test]
    fn test_special_characters_stripped() {
        let namer = NamerConfig::default();
        assert_eq!(namer.name_for("node.js"), "Nodejs");
        // "C++" strips down to a single character, below the length floor
        assert_eq!(namer.name_for("C++"), UNKNOWN_TECHNOLOGY);
    }

    #[test]
    fn test_custom_stoplist() {
        let namer = NamerConfig {
            stoplist: vec!["sticker".to_string()],
        };
        // Default stop words survive under a replacement stoplist
        assert_eq!(namer.name_for("rust badge"), "Rust Badge");
        assert_eq!(namer.name_for("rust sticker"), "Rust");
    }
}
