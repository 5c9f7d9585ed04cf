//! VISIONX scenario gallery
//!
//! Filter, sort and search over the assistive-glasses scenario catalog,
//! plus the mock data behind the demo player and product showcase.
//!
//! - `catalog/`: scenario records, built-in data and JSON loading
//! - `gallery/`: selection criteria, the filter/sort pipeline, summaries, walkthroughs
//! - `demo/`: demo clips, detection timelines, playback state
//! - `showcase/`: 3D model hotspots, narration, accessibility flags
//! - `api_server`: Axum JSON API (feature `api`)

pub mod catalog;
pub mod config;
pub mod demo;
pub mod gallery;
pub mod showcase;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Category, Difficulty, ParseError, Scenario, Step};
pub use config::ServerConfig;
pub use gallery::{filter_and_sort, GalleryCriteria, GallerySummary, Selection, SortKey};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
