//! Fixed Category Taxonomy
//!
//! The closed, pre-declared category set used by the fixed-taxonomy
//! resolver policy. Matching order is declaration order.

use serde::{Deserialize, Serialize};

/// Builtin taxonomy, in matching order
pub const BUILTIN_TAXONOMY: &[TaxonomyEntry] = &[
    TaxonomyEntry {
        key: "artificial_intelligence_and_bots",
        display_name: "Artificial Intelligence and Bots",
    },
    TaxonomyEntry {
        key: "blog",
        display_name: "Blog",
    },
    TaxonomyEntry {
        key: "blockchain",
        display_name: "Blockchain",
    },
    TaxonomyEntry {
        key: "browsers",
        display_name: "Browsers",
    },
    TaxonomyEntry {
        key: "cd",
        display_name: "CD",
    },
    TaxonomyEntry {
        key: "ci",
        display_name: "CI",
    },
    TaxonomyEntry {
        key: "cloud_storage",
        display_name: "Cloud Storage",
    },
    TaxonomyEntry {
        key: "cryptocurrency",
        display_name: "Cryptocurrency",
    },
    TaxonomyEntry {
        key: "databases",
        display_name: "Databases",
    },
    TaxonomyEntry {
        key: "design",
        display_name: "Design",
    },
    TaxonomyEntry {
        key: "developer_forums",
        display_name: "Developer/Forums",
    },
    TaxonomyEntry {
        key: "documentation_platforms",
        display_name: "Documentation Platforms",
    },
    TaxonomyEntry {
        key: "education",
        display_name: "Education",
    },
    TaxonomyEntry {
        key: "funding",
        display_name: "Funding",
    },
    TaxonomyEntry {
        key: "frameworks_platforms_and_libraries",
        display_name: "Frameworks, Platforms and Libraries",
    },
    TaxonomyEntry {
        key: "gaming",
        display_name: "Gaming",
    },
    TaxonomyEntry {
        key: "game_consoles",
        display_name: "Game Consoles",
    },
    TaxonomyEntry {
        key: "hosting_saas",
        display_name: "Hosting/SaaS",
    },
    TaxonomyEntry {
        key: "ides_editors",
        display_name: "IDEs/Editors",
    },
    TaxonomyEntry {
        key: "languages",
        display_name: "Languages",
    },
    TaxonomyEntry {
        key: "ml_dl",
        display_name: "ML/DL",
    },
    TaxonomyEntry {
        key: "music",
        display_name: "Music",
    },
    TaxonomyEntry {
        key: "office",
        display_name: "Office",
    },
    TaxonomyEntry {
        key: "operating_system",
        display_name: "Operating System",
    },
    TaxonomyEntry {
        key: "orm",
        display_name: "ORM",
    },
    TaxonomyEntry {
        key: "other",
        display_name: "Other",
    },
    TaxonomyEntry {
        key: "quantum_programming_frameworks_and_libraries",
        display_name: "Quantum Programming Frameworks and Libraries",
    },
    TaxonomyEntry {
        key: "search_engines",
        display_name: "Search Engines",
    },
    TaxonomyEntry {
        key: "servers",
        display_name: "Servers",
    },
    TaxonomyEntry {
        key: "smartphone_brands",
        display_name: "Smartphone Brands",
    },
    TaxonomyEntry {
        key: "social",
        display_name: "Social",
    },
    TaxonomyEntry {
        key: "store",
        display_name: "Store",
    },
    TaxonomyEntry {
        key: "streaming",
        display_name: "Streaming",
    },
    TaxonomyEntry {
        key: "testing",
        display_name: "Testing",
    },
    TaxonomyEntry {
        key: "version_control",
        display_name: "Version Control",
    },
    TaxonomyEntry {
        key: "wearables",
        display_name: "Wearables",
    },
    TaxonomyEntry {
        key: "work_jobs",
        display_name: "Work/Jobs",
    },
];

/// Static taxonomy entry
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    /// Stable key (used for grouping and output filenames)
    pub key: &'static str,
    /// Display name as it appears in documents
    pub display_name: &'static str,
}

/// Runtime category definition, builtin or from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub display_name: String,
}

impl From<&TaxonomyEntry> for CategoryDef {
    fn from(entry: &TaxonomyEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            display_name: entry.display_name.to_string(),
        }
    }
}

/// `[[taxonomy]]` entry in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfigEntry {
    pub key: String,
    pub display_name: String,
}

/// Ordered runtime taxonomy.
///
/// Declaration order doubles as matching priority: the first entry whose
/// textual form appears in a line wins.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<CategoryDef>,
}

impl Taxonomy {
    /// Builtin taxonomy only
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_TAXONOMY.iter().map(CategoryDef::from).collect(),
        }
    }

    /// Extend or override from config entries.
    ///
    /// Same key overrides the display name in place; new keys are appended
    /// after the builtins, so builtin matching priority is unchanged.
    pub fn with_config(mut self, extra: &[TaxonomyConfigEntry]) -> Self {
        for entry in extra {
            match self.entries.iter_mut().find(|e| e.key == entry.key) {
                Some(existing) => existing.display_name = entry.display_name.clone(),
                None => self.entries.push(CategoryDef {
                    key: entry.key.clone(),
                    display_name: entry.display_name.clone(),
                }),
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.get(key).map(|e| e.display_name.as_str())
    }

    /// Keys in declaration order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn all(&self) -> &[CategoryDef] {
        &self.entries
    }

    /// Match a line against every textual form a category heading can
    /// take: `# Name` through `#### Name`, `**Name**`, `- Name`, `* Name`,
    /// or a table-of-contents link `[Name]`. Containment, not prefix, so a
    /// category set inside a ToC line still registers.
    pub fn match_line(&self, line: &str) -> Option<&CategoryDef> {
        for entry in &self.entries {
            let name = entry.display_name.as_str();
            let forms = [
                format!("# {name}"),
                format!("## {name}"),
                format!("### {name}"),
                format!("#### {name}"),
                format!("**{name}**"),
                format!("- {name}"),
                format!("* {name}"),
                format!("[{name}]"),
            ];
            if forms.iter().any(|form| line.contains(form.as_str())) {
                return Some(entry);
            }
        }
        None
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
