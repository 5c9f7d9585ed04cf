//! Mocked detection timelines for the demo player.
//!
//! Each timeline is an ordered list of frames; the objects on screen at
//! time `t` are those of the latest frame starting at or before `t`.

use serde::Serialize;

use super::scenarios::DemoScenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// One mocked object-recognition result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub id: u32,
    pub label: &'static str,
    /// Percent, 0-100
    pub confidence: u8,
    pub position: Position,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectionFrame {
    pub time_secs: f64,
    pub objects: &'static [Detection],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            90..=u8::MAX => ConfidenceTier::High,
            75..=89 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }
}

/// Summary row of the detection panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    pub objects: usize,
    /// Rounded mean confidence; 0 when nothing is detected
    pub average_confidence: u32,
    pub high_confidence: usize,
}

impl DetectionStats {
    pub fn of(detections: &[Detection]) -> Self {
        let objects = detections.len();
        let average_confidence = if objects == 0 {
            0
        } else {
            let sum: u32 = detections.iter().map(|d| u32::from(d.confidence)).sum();
            (f64::from(sum) / objects as f64).round() as u32
        };
        let high_confidence = detections
            .iter()
            .filter(|d| ConfidenceTier::of(d.confidence) == ConfidenceTier::High)
            .count();
        Self { objects, average_confidence, high_confidence }
    }
}

impl DemoScenario {
    /// Detection frames for this demo, in time order
    ///
    /// Face recognition and object detection ship without mocked detections;
    /// their timelines are empty.
    pub fn timeline(&self) -> &'static [DetectionFrame] {
        match self {
            DemoScenario::IndoorNavigation => &INDOOR_NAVIGATION,
            DemoScenario::OutdoorMobility => &OUTDOOR_MOBILITY,
            DemoScenario::ReadingAssistance => &READING_ASSISTANCE,
            DemoScenario::FaceRecognition | DemoScenario::ObjectDetection => &[],
        }
    }

    /// Objects on screen at `time_secs` into the clip
    pub fn detections_at(&self, time_secs: f64) -> &'static [Detection] {
        detections_at(self.timeline(), time_secs)
    }
}

/// Objects of the latest frame starting at or before `time_secs`
pub fn detections_at(timeline: &'static [DetectionFrame], time_secs: f64) -> &'static [Detection] {
    timeline
        .iter()
        .rev()
        .find(|frame| time_secs >= frame.time_secs)
        .map(|frame| frame.objects)
        .unwrap_or(&[])
}

const fn det(
    id: u32,
    label: &'static str,
    confidence: u8,
    x: u32,
    y: u32,
    description: &'static str,
) -> Detection {
    Detection { id, label, confidence, position: Position { x, y }, description }
}

static INDOOR_NAVIGATION: [DetectionFrame; 3] = [
    DetectionFrame {
        time_secs: 0.0,
        objects: &[
            det(1, "Door", 94, 120, 80, "Wooden door with metal handle, partially open"),
            det(2, "Wall", 98, 200, 150, "White painted wall with light switch"),
        ],
    },
    DetectionFrame {
        time_secs: 5.0,
        objects: &[
            det(3, "Chair", 87, 300, 200, "Office chair with wheels, black leather"),
            det(4, "Table", 91, 250, 180, "Wooden desk with laptop and papers"),
            det(5, "Person", 89, 180, 120, "Person sitting at desk, wearing blue shirt"),
        ],
    },
    DetectionFrame {
        time_secs: 10.0,
        objects: &[
            det(6, "Text", 92, 160, 100, "Sign reading \"Conference Room A\""),
            det(7, "Plant", 85, 320, 220, "Green potted plant on windowsill"),
        ],
    },
];

static OUTDOOR_MOBILITY: [DetectionFrame; 2] = [
    DetectionFrame {
        time_secs: 0.0,
        objects: &[
            det(1, "Crosswalk", 96, 200, 300, "Zebra crossing with white stripes"),
            det(2, "Traffic Light", 93, 100, 50, "Red traffic light, do not cross"),
        ],
    },
    DetectionFrame {
        time_secs: 8.0,
        objects: &[
            det(3, "Car", 88, 250, 200, "Blue sedan approaching from left"),
            det(4, "Sidewalk", 95, 150, 350, "Concrete sidewalk with slight crack"),
        ],
    },
];

static READING_ASSISTANCE: [DetectionFrame; 2] = [
    DetectionFrame {
        time_secs: 0.0,
        objects: &[
            det(1, "Text", 97, 200, 150, "Menu item: \"Grilled Salmon - $24.99\""),
            det(2, "Text", 94, 200, 180, "Description: \"Fresh Atlantic salmon with herbs\""),
        ],
    },
    DetectionFrame {
        time_secs: 6.0,
        objects: &[
            det(3, "Text", 96, 200, 210, "Menu item: \"Vegetarian Pasta - $18.99\""),
            det(4, "Image", 89, 300, 150, "Photo of grilled salmon dish"),
        ],
    },
];
