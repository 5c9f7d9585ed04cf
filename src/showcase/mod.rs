//! Interactive product showcase data
//!
//! - `hotspots`: points of interest on the 3D model
//! - `narration`: utterance records and canned script lines
//! - `accessibility`: preference flags

pub mod accessibility;
pub mod hotspots;
pub mod narration;

pub use accessibility::AccessibilitySettings;
pub use hotspots::{hotspots, Hotspot, HotspotId};
pub use narration::{Narrator, Utterance, VoiceSettings};
