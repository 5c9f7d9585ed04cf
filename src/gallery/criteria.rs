//! Gallery criteria: category / difficulty selections, sort key, search text.
//!
//! Two construction paths exist. `GalleryCriteria::from_ui` takes the raw
//! control values and never fails: an unknown selection matches nothing and
//! an unknown sort key leaves order unchanged. `GalleryQuery::into_criteria`
//! is for external input and rejects anything unrecognized.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Category, Difficulty, ParseError};

/// The "no filter" control value
pub const ALL: &str = "all";

/// A filter over one closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
    /// A value outside the enumeration; matches no record
    Unmatched,
}

impl<T> Selection<T>
where
    T: Copy + PartialEq + FromStr<Err = ParseError>,
{
    /// Lenient parse for values coming from the gallery controls
    pub fn from_ui(value: &str) -> Self {
        if value == ALL {
            return Selection::All;
        }
        match value.parse() {
            Ok(v) => Selection::Only(v),
            Err(_) => Selection::Unmatched,
        }
    }

    /// Strict parse: "all" or a known value, anything else is an error
    pub fn parse_strict(value: &str) -> Result<Self, ParseError> {
        if value == ALL {
            Ok(Selection::All)
        } else {
            value.parse().map(Selection::Only)
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => *v == value,
            Selection::Unmatched => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => write!(f, "{}", v),
            Selection::Unmatched => f.write_str("<unmatched>"),
        }
    }
}

/// Ordering applied to the filtered scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending, locale-aware
    #[default]
    Title,
    /// Descending
    Rating,
    /// Descending by the numeric part of the usage string
    Usage,
    /// Ascending by rank Easy < Medium < Hard
    Difficulty,
    /// Ascending by category name
    Category,
    /// Unrecognized key from the UI; keeps filter order
    Unsorted,
}

impl SortKey {
    /// Sort-control order with the labels shown next to each option
    pub const OPTIONS: [(SortKey, &'static str); 5] = [
        (SortKey::Title, "Title A-Z"),
        (SortKey::Rating, "Highest Rated"),
        (SortKey::Usage, "Most Popular"),
        (SortKey::Difficulty, "Difficulty"),
        (SortKey::Category, "Category"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::Usage => "usage",
            SortKey::Difficulty => "difficulty",
            SortKey::Category => "category",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Lenient parse; unknown keys become `Unsorted`
    pub fn from_ui(value: &str) -> Self {
        value.parse().unwrap_or(SortKey::Unsorted)
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::OPTIONS
            .iter()
            .map(|(key, _)| *key)
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseError::new("sort key", s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four inputs of the gallery pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryCriteria {
    pub category: Selection<Category>,
    pub difficulty: Selection<Difficulty>,
    pub sort: SortKey,
    /// Raw search text as typed; matching is case-insensitive
    pub search: String,
}

impl GalleryCriteria {
    /// Build from raw control values without failing
    pub fn from_ui(category: &str, difficulty: &str, sort: &str, search: &str) -> Self {
        Self {
            category: Selection::from_ui(category),
            difficulty: Selection::from_ui(difficulty),
            sort: SortKey::from_ui(sort),
            search: search.to_string(),
        }
    }

    /// Any filter narrows the catalog (whitespace-only search does not count)
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || !self.difficulty.is_all() || !self.search.trim().is_empty()
    }

    /// Reset the filters and search; the sort key is kept
    pub fn clear_filters(&mut self) {
        self.category = Selection::All;
        self.difficulty = Selection::All;
        self.search.clear();
    }

    /// Stable key for caching pipeline results
    pub fn cache_key(&self) -> String {
        format!(
            "gallery:{}|{}|{}|{}",
            self.category,
            self.difficulty,
            self.sort,
            self.search.to_lowercase()
        )
    }
}

/// Gallery criteria as received from external callers (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl GalleryQuery {
    /// Strict conversion; missing fields take the gallery defaults
    pub fn into_criteria(self) -> Result<GalleryCriteria, ParseError> {
        let category = match self.category.as_deref() {
            Some(c) => Selection::parse_strict(c)?,
            None => Selection::All,
        };
        let difficulty = match self.difficulty.as_deref() {
            Some(d) => Selection::parse_strict(d)?,
            None => Selection::All,
        };
        let sort = match self.sort.as_deref() {
            Some(s) => s.parse()?,
            None => SortKey::default(),
        };
        Ok(GalleryCriteria {
            category,
            difficulty,
            sort,
            search: self.q.unwrap_or_default(),
        })
    }
}
