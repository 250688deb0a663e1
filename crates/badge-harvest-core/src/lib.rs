pub mod category;
pub mod config;
pub mod detect;
pub mod error;
pub mod namer;
pub mod record;
pub mod report;
pub mod scanner;

pub use config::{Config, ScannerConfig, CONFIG_ENV_VAR, CONFIG_FILE};
pub use detect::{
    DetectorConfig, DEFAULT_ALT_KEYWORDS, DEFAULT_SHORT_ALT_LIMIT, DEFAULT_SHORT_ALT_SERVICES,
    DEFAULT_URL_INDICATORS,
};
pub use error::{BadgeHarvestError, Result};
pub use namer::{NamerConfig, DEFAULT_STOPLIST, UNKNOWN_TECHNOLOGY};
pub use record::{BadgeRecord, ScannedBadge};
pub use report::{aggregate, CategoryReport, Summary};
pub use scanner::Scanner;

// Category system
pub use category::{
    display_key, CategoryDef, CategoryPolicy, CategoryResolver, KeywordCategory, KeywordLists,
    KeywordsConfig, Taxonomy, TaxonomyConfigEntry, TaxonomyEntry, BUILTIN_KEYWORD_CATEGORIES,
    BUILTIN_TAXONOMY, DEFAULT_SECTION, FALLBACK_CATEGORY,
};
