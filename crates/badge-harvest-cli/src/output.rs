//! JSON persistence
//!
//! Writes one JSON file per non-empty category plus the run summary.

use std::fs;
use std::path::{Path, PathBuf};

use badge_harvest_core::{CategoryReport, Result, Summary};

pub const SUMMARY_FILE: &str = "summary.json";

/// Filesystem-safe token for a category key: lower-cased, non-word
/// characters dropped, space/hyphen runs collapsed to a single
/// underscore.
pub fn sanitize_category(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
            last_sep = false;
        } else if (ch.is_whitespace() || ch == '-') && !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Write per-category reports and the summary under `out_dir`.
///
/// Returns the category file paths in report order; the summary path is
/// fixed. Categories whose sanitized name collapses to nothing fall back
/// to a stable placeholder so a report is never silently lost.
pub fn write_reports(
    reports: &[CategoryReport],
    summary: &Summary,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let mut token = sanitize_category(&report.category_key);
        if token.is_empty() {
            token = "category".to_string();
        }
        let path = out_dir.join(format!("{token}.json"));
        let content = serde_json::to_string_pretty(report)?;
        fs::write(&path, content)?;
        written.push(path);
    }

    let summary_path = out_dir.join(SUMMARY_FILE);
    let content = serde_json::to_string_pretty(summary)?;
    fs::write(&summary_path, content)?;

    Ok(written)
}
