//! Accessibility preferences. Plain flags; rendering decides what they mean.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub captions: bool,
    pub audio_description: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub large_text: bool,
    pub keyboard_navigation: bool,
    pub screen_reader_mode: bool,
    pub auto_play: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            captions: true,
            audio_description: true,
            high_contrast: false,
            reduced_motion: false,
            large_text: false,
            keyboard_navigation: true,
            screen_reader_mode: false,
            auto_play: false,
        }
    }
}

impl AccessibilitySettings {
    pub fn enabled_count(&self) -> usize {
        [
            self.captions,
            self.audio_description,
            self.high_contrast,
            self.reduced_motion,
            self.large_text,
            self.keyboard_navigation,
            self.screen_reader_mode,
            self.auto_play,
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }

    /// Root document classes implied by the flags
    pub fn document_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.high_contrast {
            classes.push("high-contrast");
        }
        if self.large_text {
            classes.push("large-text");
        }
        if self.reduced_motion {
            classes.push("reduced-motion");
        }
        classes
    }
}
