//! Search pipeline: term canonicalization, literal matching and selectors.
//!
//! ```text
//! raw term → normalize → case fold → Matcher → filter(items)
//! ```
//!
//! User input is only ever matched as literal text, case-insensitively; no
//! pattern is compiled from it. Terms
//! whose canonical form is shorter than [`MIN_SEARCH_LENGTH`] do not filter.
//!
//! # Modules
//!
//! - [`normalize`]: Whitespace canonicalization and pattern escaping
//! - [`matcher`]: Minimum-length gate and matcher construction
//! - [`selectors`]: `filter`, `count`, `has_no_results` and the filter memo

pub mod matcher;
pub mod normalize;
pub mod selectors;

pub use matcher::{build_matcher, clears_gate, Matcher, MIN_SEARCH_LENGTH};
pub use normalize::{escape_for_matching, normalize};
pub use selectors::{count, filter, has_no_results, FilterMemo};
