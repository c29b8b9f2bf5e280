//! Pure palette logic: category derivation, filtering and the record boundary.
//!
//! Nothing in here performs I/O. The shell recomputes categories and the
//! filtered grid from the latest snapshot on every input change.
mod categories;
mod filter;
pub mod record;

pub use categories::{
    CategoryOptions, DEFAULT_ALL_LABEL, DEFAULT_TOP_CATEGORIES, category_vocabulary,
    derive_categories, title_case,
};
pub use filter::{Dedup, ValueKey, dedup_colors, filter_colors};
