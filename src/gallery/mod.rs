//! Scenario gallery
//!
//! - `criteria`: filter selections, sort key, search text
//! - `pipeline`: the filter/sort/search computation
//! - `summary`: result counts and catalog aggregates
//! - `walkthrough`: per-scenario step cursor and narration

pub mod criteria;
pub mod pipeline;
pub mod summary;
pub mod walkthrough;

pub use criteria::{GalleryCriteria, GalleryQuery, Selection, SortKey};
pub use pipeline::filter_and_sort;
pub use summary::{CatalogStats, GallerySummary};
pub use walkthrough::{Direction, NarrationScript, Walkthrough};
