//! Scenario records and their closed enumerations.
//!
//! Categories and difficulties serialize as their display names
//! ("Healthcare", "Easy") so catalog files read the same as the gallery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error for strict parsing of enum values coming from outside the crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Healthcare,
    Navigation,
    Shopping,
    Social,
    Transportation,
    Education,
    Safety,
}

impl Category {
    /// Filter-control order, as offered by the gallery
    pub const ALL: [Category; 7] = [
        Category::Healthcare,
        Category::Navigation,
        Category::Shopping,
        Category::Social,
        Category::Transportation,
        Category::Education,
        Category::Safety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Navigation => "Navigation",
            Category::Shopping => "Shopping",
            Category::Social => "Social",
            Category::Transportation => "Transportation",
            Category::Education => "Education",
            Category::Safety => "Safety",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::new("category", s))
    }
}

// ============================================================================
// Difficulty
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Fixed ordering rank used by the difficulty sort (Easy=1 .. Hard=3)
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseError::new("difficulty", s))
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// One walkthrough step of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// A static record describing one mocked assistive-technology use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Free text, e.g. "2-3 min"
    pub duration: String,
    /// 0.0 - 5.0
    pub rating: f64,
    /// Free text, e.g. "15,000+"
    pub usage: String,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Narrated when a demo of this scenario starts
    #[serde(default)]
    pub audio_description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Numeric usage count with every non-digit stripped ("15,000+" -> 15000).
    ///
    /// None when the string carries no digits or overflows u64.
    pub fn usage_count(&self) -> Option<u64> {
        parse_usage(&self.usage)
    }
}

/// Strip all non-digit characters and parse what remains
pub fn parse_usage(usage: &str) -> Option<u64> {
    let digits: String = usage.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
