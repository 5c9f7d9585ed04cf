//! Demo player playback state: time, progress, seeking, speed, volume.

use serde::Serialize;

use super::detections::{Detection, DetectionStats};
use super::scenarios::DemoScenario;

/// Speeds offered by the player
pub const PLAYBACK_RATES: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub scenario: DemoScenario,
    pub current_secs: f64,
    pub duration_secs: f64,
    pub rate: f32,
    pub playing: bool,
    /// Slider level 0.0..=1.0, kept while muted
    pub volume: f32,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DemoScenario::default())
    }
}

impl PlaybackState {
    pub fn new(scenario: DemoScenario) -> Self {
        Self {
            scenario,
            current_secs: 0.0,
            duration_secs: 0.0,
            rate: 1.0,
            playing: false,
            volume: 1.0,
            muted: false,
        }
    }

    /// Switching demos rewinds to the start
    pub fn select(&mut self, scenario: DemoScenario) {
        self.scenario = scenario;
        self.current_secs = 0.0;
        self.playing = false;
    }

    pub fn set_duration(&mut self, duration_secs: f64) {
        self.duration_secs = duration_secs.max(0.0);
        self.current_secs = self.current_secs.min(self.duration_secs);
    }

    /// Clamped to the clip; NaN rewinds to the start
    pub fn set_time(&mut self, secs: f64) {
        self.current_secs = if secs.is_nan() {
            0.0
        } else {
            secs.clamp(0.0, self.duration_secs.max(0.0))
        };
    }

    /// Jump to a fraction of the clip (clamped to 0..=1)
    pub fn seek_fraction(&mut self, fraction: f64) {
        let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        self.current_secs = f * self.duration_secs;
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Clip reached its end
    pub fn ended(&mut self) {
        self.playing = false;
        self.current_secs = self.duration_secs;
    }

    /// Slider input; a level of zero mutes
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        self.muted = self.volume == 0.0;
    }

    /// Unmuting restores the slider level
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Level actually sent to the player
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Only the offered speeds are accepted; returns whether the rate changed
    pub fn set_rate(&mut self, rate: f32) -> bool {
        if PLAYBACK_RATES.contains(&rate) {
            self.rate = rate;
            true
        } else {
            false
        }
    }

    /// Percent complete; 0 until the duration is known
    pub fn progress(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.current_secs / self.duration_secs * 100.0
        } else {
            0.0
        }
    }

    pub fn detections(&self) -> &'static [Detection] {
        self.scenario.detections_at(self.current_secs)
    }

    pub fn detection_stats(&self) -> DetectionStats {
        DetectionStats::of(self.detections())
    }

    /// "m:ss / m:ss"
    pub fn time_label(&self) -> String {
        format!("{} / {}", format_time(self.current_secs), format_time(self.duration_secs))
    }
}

/// Whole seconds as "m:ss"; negative or NaN input reads as 0:00
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 { secs.floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}
