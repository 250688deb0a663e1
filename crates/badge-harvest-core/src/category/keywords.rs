//! Keyword Classification
//!
//! Content-based, heading-agnostic category assignment: a technology name
//! is matched against ordered keyword lists, first list wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category assigned when no keyword list matches
pub const FALLBACK_CATEGORY: &str = "other";

/// Static keyword list for one category
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
}

/// Builtin keyword lists, in priority order.
///
/// The order is part of the output contract: a technology appearing in
/// more than one list ("docker" is under both tools and devops) always
/// resolves to the earlier list.
pub const BUILTIN_KEYWORD_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        key: "programming_languages",
        keywords: &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "go",
            "rust",
            "php",
            "ruby",
            "swift",
            "kotlin",
            "typescript",
            "html",
            "css",
        ],
    },
    KeywordCategory {
        key: "frameworks",
        keywords: &[
            "react",
            "vue",
            "angular",
            "django",
            "flask",
            "spring",
            "laravel",
            "express",
            "rails",
            "bootstrap",
            "tailwind",
            "jquery",
        ],
    },
    KeywordCategory {
        key: "tools",
        keywords: &[
            "git",
            "github",
            "gitlab",
            "vscode",
            "visual studio",
            "docker",
            "kubernetes",
            "postman",
            "figma",
            "photoshop",
            "illustrator",
        ],
    },
    KeywordCategory {
        key: "services",
        keywords: &[
            "aws",
            "azure",
            "google cloud",
            "firebase",
            "mongodb",
            "mysql",
            "postgresql",
            "redis",
            "nginx",
            "apache",
        ],
    },
    KeywordCategory {
        key: "devops",
        keywords: &[
            "docker",
            "kubernetes",
            "jenkins",
            "travis",
            "circleci",
            "github actions",
            "gitlab ci",
            "ansible",
            "terraform",
            "prometheus",
            "grafana",
        ],
    },
    KeywordCategory {
        key: "social",
        keywords: &[
            "twitter",
            "linkedin",
            "facebook",
            "instagram",
            "youtube",
            "discord",
            "telegram",
            "slack",
            "reddit",
        ],
    },
];

/// `[keywords]` section of the config file: list name to extra keywords.
///
/// Known list names extend the builtin list; unknown names become new
/// lists appended after the builtins (alphabetically, for reproducible
/// priority among additions).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    #[serde(flatten)]
    pub lists: BTreeMap<String, Vec<String>>,
}

/// Runtime keyword lists, in priority order
#[derive(Debug, Clone)]
pub struct KeywordLists {
    categories: Vec<(String, Vec<String>)>,
}

impl KeywordLists {
    /// Builtin lists only
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_KEYWORD_CATEGORIES
                .iter()
                .map(|cat| {
                    (
                        cat.key.to_string(),
                        cat.keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Extend from the config file
    pub fn with_config(mut self, config: &KeywordsConfig) -> Self {
        for (name, extra) in &config.lists {
            match self.categories.iter_mut().find(|(key, _)| key == name) {
                Some((_, keywords)) => {
                    keywords.extend(extra.iter().cloned());
                }
                None => self.categories.push((name.clone(), extra.clone())),
            }
        }
        self
    }

    /// Classify a technology name.
    ///
    /// Lower-cased substring containment against each list in priority
    /// order; no match yields the fallback category. Pure function of the
    /// name and the lists.
    pub fn classify(&self, technology: &str) -> &str {
        let tech = technology.to_lowercase();
        for (key, keywords) in &self.categories {
            if keywords.iter().any(|k| tech.contains(k.as_str())) {
                return key;
            }
        }
        FALLBACK_CATEGORY
    }

    /// Category keys in priority order, fallback included last
    pub fn keys(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(std::iter::once(FALLBACK_CATEGORY))
            .collect()
    }
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Display form of a keyword category key ("programming_languages" ->
/// "Programming Languages")
pub fn display_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
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
    fn test_language_classification() {
        let lists = KeywordLists::builtin();
        assert_eq!(lists.classify("Python"), "programming_languages");
        assert_eq!(lists.classify("TypeScript"), "programming_languages");
    }

    #[test]
    fn test_framework_classification() {
        let lists = KeywordLists::builtin();
        assert_eq!(lists.classify("React"), "frameworks");
    }

    #[test]
    fn test_unmatched_falls_back_to_other() {
        let lists = KeywordLists::builtin();
        assert_eq!(lists.classify("Arduino"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let lists = KeywordLists::builtin();
        // Docker appears in both the tools and devops lists; tools is
        // declared first and always wins
        assert_eq!(lists.classify("Docker"), "tools");
        assert_eq!(lists.classify("Kubernetes"), "tools");
        // Jenkins is only in the devops list
        assert_eq!(lists.classify("Jenkins"), "devops");
    }

    #[test]
    fn test_substring_matching() {
        let lists = KeywordLists::builtin();
        // "github actions" contains "git" which sits in the earlier tools
        // list, so the devops entry never gets a chance
        assert_eq!(lists.classify("GitHub Actions"), "tools");
    }

    #[test]
    fn test_config_extends_known_list() {
        let config = KeywordsConfig {
            lists: [("programming_languages".to_string(), vec!["zig".to_string()])]
                .into_iter()
                .collect(),
        };
        let lists = KeywordLists::builtin().with_config(&config);
        assert_eq!(lists.classify("Zig"), "programming_languages");
    }

    #[test]
    fn test_config_appends_new_list() {
        let config = KeywordsConfig {
            lists: [("hardware".to_string(), vec!["arduino".to_string()])]
                .into_iter()
                .collect(),
        };
        let lists = KeywordLists::builtin().with_config(&config);
        assert_eq!(lists.classify("Arduino"), "hardware");
        // New lists rank after every builtin
        assert_eq!(lists.classify("Docker"), "tools");
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("programming_languages"), "Programming Languages");
        assert_eq!(display_key("other"), "Other");
    }
}
