//! # Category Module
//!
//! Assigns each detected badge to a category. Three interchangeable
//! policies share one resolver:
//!
//! - **HeadingTracking**: the nearest preceding markdown heading names the
//!   category; `"General"` before the first one
//! - **FixedTaxonomy**: a closed, pre-declared category set matched
//!   against several textual heading forms; badges outside it are dropped
//! - **KeywordClassification**: the technology name is matched against
//!   priority-ordered keyword lists, heading-agnostic
//!
//! ## Module layout
//!
//! - `taxonomy`: the fixed category set and its matching forms
//! - `keywords`: the ordered keyword lists
//! - `resolver`: policy selection and per-document category state
//!
//! ## Example
//!
//! ```rust
//! use badge_harvest_core::category::{CategoryPolicy, CategoryResolver};
//!
//! let mut resolver = CategoryResolver::new(CategoryPolicy::HeadingTracking);
//! resolver.observe_line("## Languages");
//! assert_eq!(resolver.resolve("Go").as_deref(), Some("Languages"));
//! ```

mod keywords;
mod resolver;
mod taxonomy;

// Re-exports
pub use keywords::{
    display_key, KeywordCategory, KeywordLists, KeywordsConfig, BUILTIN_KEYWORD_CATEGORIES,
    FALLBACK_CATEGORY,
};
pub use resolver::{CategoryPolicy, CategoryResolver, DEFAULT_SECTION};
pub use taxonomy::{
    CategoryDef, Taxonomy, TaxonomyConfigEntry, TaxonomyEntry, BUILTIN_TAXONOMY,
};
