//! Canned narration
//!
//! Nothing here synthesizes speech. A `Narrator` turns script lines into
//! `Utterance` records (text + voice settings) for the client to speak, and
//! models the one-voice-at-a-time rule: a new line cancels the current one.

use serde::Serialize;

/// Voice parameters handed to the speech engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self { rate: 0.9, pitch: 1.0, volume: 0.8 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub voice: VoiceSettings,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), voice: VoiceSettings::default() }
    }
}

/// Single-slot narration queue gated by the audio preference
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    enabled: bool,
    current: Option<Utterance>,
}

impl Narrator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, current: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning audio off also cancels whatever is playing
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop();
        }
    }

    /// Replace the current utterance; disabled narrators and empty text emit nothing
    pub fn speak(&mut self, text: &str) -> Option<&Utterance> {
        self.speak_with(text, VoiceSettings::default())
    }

    pub fn speak_with(&mut self, text: &str, voice: VoiceSettings) -> Option<&Utterance> {
        if !self.enabled || text.is_empty() {
            return None;
        }
        self.current = Some(Utterance { text: text.to_string(), voice });
        self.current.as_ref()
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Utterance> {
        self.current.as_ref()
    }
}

/// Script lines spoken by the showcase and gallery
pub mod scripts {
    pub const MODEL_LOADED: &str =
        "3D model loaded successfully. You can now explore the smart glasses features.";

    pub const AUDIO_ENABLED: &str =
        "Audio narration enabled. You will now hear descriptions and guidance.";

    pub const DEMO_LAUNCH: &str = "Launching interactive demo experience. You will see real-time AI vision capabilities including object detection, navigation assistance, and text recognition in action.";

    pub const DEMO_REDIRECT: &str = "Redirecting to demo experience player. You will experience real-world scenarios with AI vision assistance.";

    pub const KEYBOARD_HELP: &str = "Keyboard shortcuts: H for help, Space to reset 3D view, Arrow keys to rotate model, Plus and minus to zoom, Escape to close dialogs, Tab to navigate interface elements.";

    pub fn captions_toggled(enabled: bool) -> String {
        format!("Captions {}", if enabled { "enabled" } else { "disabled" })
    }

    /// Spoken after the theme flips; `dark` is the new mode
    pub fn theme_switched(dark: bool) -> String {
        format!("Switched to {} mode", if dark { "dark" } else { "light" })
    }

    pub fn hotspot_selected(name: &str, description: &str) -> String {
        format!("Selected {}. {}", name, description)
    }

    pub fn demo_start(title: &str, audio_description: &str) -> String {
        format!("Starting demonstration for {}. {}", title, audio_description)
    }
}
