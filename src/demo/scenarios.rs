//! Demo player scenarios
//!
//! Closed set of demo keys. Per-scenario data (metadata, video source,
//! detection timeline) is an exhaustive match on the enum, so a scenario
//! without data is visible at compile time rather than at lookup time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoScenario {
    #[default]
    IndoorNavigation,
    OutdoorMobility,
    ReadingAssistance,
    FaceRecognition,
    ObjectDetection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemoLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Selector metadata for one demo
#[derive(Debug, Clone, Serialize)]
pub struct DemoInfo {
    pub key: DemoScenario,
    pub label: &'static str,
    pub description: &'static str,
    /// Nominal running time, "m:ss"
    pub duration: &'static str,
    pub level: DemoLevel,
    pub video_source: &'static str,
}

impl DemoScenario {
    pub const ALL: [DemoScenario; 5] = [
        DemoScenario::IndoorNavigation,
        DemoScenario::OutdoorMobility,
        DemoScenario::ReadingAssistance,
        DemoScenario::FaceRecognition,
        DemoScenario::ObjectDetection,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DemoScenario::IndoorNavigation => "indoor-navigation",
            DemoScenario::OutdoorMobility => "outdoor-mobility",
            DemoScenario::ReadingAssistance => "reading-assistance",
            DemoScenario::FaceRecognition => "face-recognition",
            DemoScenario::ObjectDetection => "object-detection",
        }
    }

    pub fn info(&self) -> DemoInfo {
        let (label, description, duration, level) = match self {
            DemoScenario::IndoorNavigation => (
                "Indoor Navigation",
                "Navigate through office spaces and buildings",
                "2:30",
                DemoLevel::Beginner,
            ),
            DemoScenario::OutdoorMobility => (
                "Outdoor Mobility",
                "Street crossing and sidewalk navigation",
                "3:15",
                DemoLevel::Intermediate,
            ),
            DemoScenario::ReadingAssistance => (
                "Reading Assistance",
                "Menu reading and text recognition",
                "2:45",
                DemoLevel::Beginner,
            ),
            DemoScenario::FaceRecognition => (
                "Face Recognition",
                "Identifying people in social settings",
                "3:00",
                DemoLevel::Advanced,
            ),
            DemoScenario::ObjectDetection => (
                "Object Detection",
                "Identifying everyday objects and obstacles",
                "2:20",
                DemoLevel::Beginner,
            ),
        };
        DemoInfo {
            key: *self,
            label,
            description,
            duration,
            level,
            video_source: self.video_source(),
        }
    }

    /// Mock clip played for this demo
    pub fn video_source(&self) -> &'static str {
        match self {
            DemoScenario::IndoorNavigation | DemoScenario::FaceRecognition => {
                "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4"
            }
            DemoScenario::OutdoorMobility | DemoScenario::ObjectDetection => {
                "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4"
            }
            DemoScenario::ReadingAssistance => {
                "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_5mb.mp4"
            }
        }
    }

    /// Title-cased key: "indoor-navigation" -> "Indoor Navigation"
    pub fn display_title(&self) -> String {
        self.key()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DemoScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DemoScenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoScenario::ALL
            .iter()
            .copied()
            .find(|d| d.key() == s)
            .ok_or_else(|| ParseError::new("demo scenario", s))
    }
}
