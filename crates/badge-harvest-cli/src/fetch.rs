//! Remote README fetching
//!
//! Resolves a GitHub repository URL to its raw README content, trying the
//! common default branch names in order. Transport is `curl`; no HTTP
//! client is linked in.

use std::io;
use std::process::Command;

use badge_harvest_core::{BadgeHarvestError, Result};

const GITHUB_PREFIX: &str = "https://github.com/";

/// Branch names tried in order when resolving a repository README
pub const README_BRANCHES: &[&str] = &["main", "master", "trunk"];

/// A fetched document plus the identifier to tag its records with
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub content: String,
    pub source_id: String,
}

/// Fetch README content for a repository URL.
///
/// GitHub URLs are rewritten to raw.githubusercontent.com and the branch
/// names in `README_BRANCHES` are tried in order; any other URL is
/// fetched as-is. A target that yields nothing on any branch is a fatal
/// condition for this fetch only.
pub fn fetch_readme(repo_url: &str) -> Result<FetchedDocument> {
    let repo_url = repo_url.trim_end_matches('/');

    if let Some(owner_repo) = repo_url.strip_prefix(GITHUB_PREFIX) {
        for branch in README_BRANCHES {
            let raw_url =
                format!("https://raw.githubusercontent.com/{owner_repo}/{branch}/README.md");
            if let Some(content) = curl(&raw_url)? {
                return Ok(FetchedDocument {
                    content,
                    source_id: raw_url,
                });
            }
        }

        return Err(BadgeHarvestError::Fetch {
            url: repo_url.to_string(),
            message: format!(
                "no README.md found on branches {}",
                README_BRANCHES.join(", ")
            ),
        });
    }

    match curl(repo_url)? {
        Some(content) => Ok(FetchedDocument {
            content,
            source_id: repo_url.to_string(),
        }),
        None => Err(BadgeHarvestError::Fetch {
            url: repo_url.to_string(),
            message: "request failed".to_string(),
        }),
    }
}

/// One `curl -fsSL` invocation. `Ok(None)` means the URL did not resolve
/// (curl ran but exited nonzero); hard failures to run curl are errors.
fn curl(url: &str) -> Result<Option<String>> {
    let output = Command::new("curl").args(["-fsSL", url]).output();

    match output {
        Ok(output) if output.status.success() => {
            Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
        }
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(BadgeHarvestError::Fetch {
            url: url.to_string(),
            message: "curl not found - install curl to use fetch".to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
