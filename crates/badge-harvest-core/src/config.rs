use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{
    CategoryPolicy, CategoryResolver, KeywordLists, KeywordsConfig, Taxonomy, TaxonomyConfigEntry,
    DEFAULT_SECTION,
};
use crate::detect::DetectorConfig;
use crate::error::{BadgeHarvestError, Result};
use crate::namer::NamerConfig;
use crate::scanner::Scanner;

pub const CONFIG_FILE: &str = "badge-harvest.toml";
pub const CONFIG_ENV_VAR: &str = "BADGE_HARVEST_CONFIG";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# badge-harvest configuration file
# Every section is optional; omitted values use the builtin defaults.

[detector]
# URL substrings that mark an image as a badge (case-insensitive)
# url_indicators = ["shields.io", "badge", "img.shields", "badges"]
# Alt-text substrings that mark an image as a badge
# alt_keywords = ["badge", "version", "license", "build", "coverage"]
# Short-alt clause: alt text below this length plus a service URL qualifies
# short_alt_limit = 30
# short_alt_services = ["shields", "badge"]

[namer]
# Substrings deleted from alt text before deriving the technology name
# stoplist = ["badge", "icon", "logo", "shield", "style"]

[scanner]
# Category for badges seen before the first heading (heading policy)
# default_section = "General"

[keywords]
# Extra keywords per classification list; unknown list names become new
# lists ranked after the builtins
# programming_languages = ["zig", "elixir"]
# hardware = ["arduino", "raspberry pi"]

# Extra fixed-taxonomy categories, matched after the builtins
# [[taxonomy]]
# key = "robotics"
# display_name = "Robotics"
"#;

/// Runtime configuration, loaded from `badge-harvest.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detector: DetectorConfig,

    #[serde(default)]
    pub namer: NamerConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub taxonomy: Vec<TaxonomyConfigEntry>,
}

/// `[scanner]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Section sentinel before the first heading
    #[serde(default = "default_section")]
    pub default_section: String,
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            default_section: default_section(),
        }
    }
}

impl Config {
    /// Load config from a file path; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| BadgeHarvestError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Initialize a config file with the default template (rich comments)
    pub fn init(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path.to_path_buf())
    }

    /// Scanner configured from this config
    pub fn scanner(&self) -> Scanner {
        Scanner::new()
            .with_detector(self.detector.clone())
            .with_namer(self.namer.clone())
    }

    /// Resolver for the given policy, configured from this config
    pub fn resolver(&self, policy: CategoryPolicy) -> CategoryResolver {
        CategoryResolver::new(policy)
            .with_taxonomy(Taxonomy::builtin().with_config(&self.taxonomy))
            .with_keywords(KeywordLists::builtin().with_config(&self.keywords))
            .with_default_section(self.scanner.default_section.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/badge-harvest.toml")).unwrap();
        assert_eq!(config.scanner.default_section, DEFAULT_SECTION);
        assert!(!config.detector.url_indicators.is_empty());
        assert!(!config.namer.stoplist.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[scanner]
default_section = "Uncategorized"
"#,
        )
        .unwrap();
        assert_eq!(config.scanner.default_section, "Uncategorized");
        assert!(!config.detector.url_indicators.is_empty());
    }

    #[test]
    fn test_config_wires_resolver() {
        let config: Config = toml::from_str(
            r#"
[keywords]
hardware = ["arduino"]

[[taxonomy]]
key = "robotics"
display_name = "Robotics"
"#,
        )
        .unwrap();

        let resolver = config.resolver(CategoryPolicy::KeywordClassification);
        assert_eq!(resolver.resolve("Arduino Uno").as_deref(), Some("hardware"));

        let mut resolver = config.resolver(CategoryPolicy::FixedTaxonomy);
        resolver.observe_line("## Robotics");
        assert_eq!(resolver.resolve("x").as_deref(), Some("robotics"));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge-harvest.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = Config::load(&path).unwrap_err();
        match err {
            BadgeHarvestError::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge-harvest.toml");

        Config::init(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[detector]"));

        // A second init leaves an existing file alone
        std::fs::write(&path, "[scanner]\ndefault_section = \"X\"\n").unwrap();
        Config::init(&path).unwrap();
        let kept = std::fs::read_to_string(&path).unwrap();
        assert!(kept.contains("default_section"));
        assert!(!kept.contains("[detector]"));
    }
}
