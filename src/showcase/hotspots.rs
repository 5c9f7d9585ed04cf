//! Clickable points of interest on the 3D glasses model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::ParseError;

use super::narration::{scripts, Utterance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotspotId {
    Camera,
    SpeakerLeft,
    SpeakerRight,
    Microphone,
    Battery,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotspot {
    pub id: HotspotId,
    pub name: &'static str,
    /// Model-space coordinates [x, y, z]
    pub position: [f32; 3],
    /// One sentence per line
    pub description: &'static str,
}

impl HotspotId {
    pub const ALL: [HotspotId; 5] = [
        HotspotId::Camera,
        HotspotId::SpeakerLeft,
        HotspotId::SpeakerRight,
        HotspotId::Microphone,
        HotspotId::Battery,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            HotspotId::Camera => "camera",
            HotspotId::SpeakerLeft => "speaker-left",
            HotspotId::SpeakerRight => "speaker-right",
            HotspotId::Microphone => "microphone",
            HotspotId::Battery => "battery",
        }
    }

    pub fn hotspot(&self) -> Hotspot {
        let (name, position, description) = match self {
            HotspotId::Camera => (
                "AI Camera Module",
                [0.8, 0.2, 0.5],
                "Advanced computer vision camera with real-time object detection and scene analysis.\nCaptures high-resolution images for AI processing.\nProvides visual context for navigation and object recognition.",
            ),
            HotspotId::SpeakerLeft => (
                "Bone Conduction Speaker",
                [-1.2, -0.3, 0.2],
                "Bone conduction technology delivers crystal-clear audio without blocking ambient sounds.\nAllows users to hear AI descriptions while staying aware of surroundings.\nComfortable for extended wear with no ear canal obstruction.",
            ),
            HotspotId::SpeakerRight => (
                "Bone Conduction Speaker",
                [1.2, -0.3, 0.2],
                "Stereo bone conduction speaker for immersive spatial audio experience.\nProvides directional audio cues for navigation assistance.\nWeather-resistant design for outdoor use.",
            ),
            HotspotId::Microphone => (
                "Voice Command Microphone",
                [0.0, -0.5, 0.8],
                "High-sensitivity microphone with noise cancellation technology.\nEnables hands-free voice commands and queries.\nSupports natural language processing for intuitive interaction.",
            ),
            HotspotId::Battery => (
                "Battery Compartment",
                [1.5, 0.0, -0.3],
                "Long-lasting lithium battery provides 12+ hours of continuous use.\nQuick-charge capability with USB-C connector.\nLightweight design maintains comfortable wearing experience.",
            ),
        };
        Hotspot { id: *self, name, position, description }
    }
}

impl Hotspot {
    /// Narration spoken when the hotspot is selected
    pub fn selection_utterance(&self) -> Utterance {
        Utterance::new(scripts::hotspot_selected(self.name, self.description))
    }

    pub fn description_lines(&self) -> impl Iterator<Item = &'static str> {
        self.description.lines()
    }
}

/// All hotspots in model order
pub fn hotspots() -> Vec<Hotspot> {
    HotspotId::ALL.iter().map(HotspotId::hotspot).collect()
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HotspotId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotspotId::ALL
            .iter()
            .copied()
            .find(|h| h.key() == s)
            .ok_or_else(|| ParseError::new("hotspot", s))
    }
}
