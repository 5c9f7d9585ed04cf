//! Scenario Catalog
//!
//! The immutable set of scenario records served by the gallery:
//! - `types`: Scenario, Step and the closed Category / Difficulty enums
//! - `builtin`: the ten-scenario sample set
//! - `loader`: JSON catalog files (validated once at startup)
//!
//! A catalog never changes after construction. Callers share it behind an
//! `Arc` and derive filtered views from `scenarios()`.

pub mod builtin;
pub mod loader;
pub mod types;

pub use types::{parse_usage, Category, Difficulty, ParseError, Scenario, Step};

use rustc_hash::FxHashMap;

/// Validation and loading failures for scenario catalogs
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog file {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate scenario id {0}")]
    DuplicateId(u32),

    #[error("scenario {id} has rating {rating}, expected 0-5")]
    RatingOutOfRange { id: u32, rating: f64 },
}

/// Read-only scenario set with an id index
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
    by_id: FxHashMap<u32, usize>,
}

impl Catalog {
    /// Catalog of the built-in sample scenarios
    pub fn builtin() -> Self {
        // The sample set is known-valid; index it directly
        Self::index(builtin::builtin_scenarios())
    }

    /// Validate a scenario list and build the catalog
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id
    /// - `RatingOutOfRange` when a rating is not a finite value in 0-5
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        let mut seen: FxHashMap<u32, ()> = FxHashMap::default();
        for s in &scenarios {
            if seen.insert(s.id, ()).is_some() {
                return Err(CatalogError::DuplicateId(s.id));
            }
            if !s.rating.is_finite() || !(0.0..=5.0).contains(&s.rating) {
                return Err(CatalogError::RatingOutOfRange { id: s.id, rating: s.rating });
            }
        }
        Ok(Self::index(scenarios))
    }

    fn index(scenarios: Vec<Scenario>) -> Self {
        let by_id = scenarios
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.id, pos))
            .collect();
        Self { scenarios, by_id }
    }

    /// All scenarios in catalog order
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: u32) -> Option<&Scenario> {
        self.by_id.get(&id).map(|&pos| &self.scenarios[pos])
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
