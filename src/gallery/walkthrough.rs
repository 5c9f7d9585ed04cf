//! Step-by-step walkthrough of one scenario, with narration.

use serde::Serialize;

use crate::catalog::{Scenario, Step};
use crate::showcase::narration::{scripts, Utterance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Cursor over a scenario's steps; stays put at either end
#[derive(Debug, Clone)]
pub struct Walkthrough<'a> {
    scenario: &'a Scenario,
    current: usize,
}

impl<'a> Walkthrough<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { scenario, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&'a Step> {
        self.scenario.steps.get(self.current)
    }

    /// Move one step; returns the narration for the step landed on
    pub fn navigate(&mut self, direction: Direction) -> Option<Utterance> {
        let len = self.scenario.steps.len();
        match direction {
            Direction::Next if self.current + 1 < len => self.current += 1,
            Direction::Prev if self.current > 0 => self.current -= 1,
            _ => {}
        }
        self.current_step().map(|step| Utterance::new(step.description.clone()))
    }

    /// Narration when the demo of this scenario starts
    pub fn start(&mut self) -> Utterance {
        self.current = 0;
        Utterance::new(scripts::demo_start(
            &self.scenario.title,
            &self.scenario.audio_description,
        ))
    }
}

/// Every utterance of a scenario demo: the intro then one per step
#[derive(Debug, Clone, Serialize)]
pub struct NarrationScript {
    pub scenario_id: u32,
    pub intro: Utterance,
    pub steps: Vec<Utterance>,
}

impl NarrationScript {
    pub fn for_scenario(scenario: &Scenario) -> Self {
        let mut walk = Walkthrough::new(scenario);
        let intro = walk.start();
        let steps = scenario
            .steps
            .iter()
            .map(|s| Utterance::new(s.description.clone()))
            .collect();
        Self { scenario_id: scenario.id, intro, steps }
    }
}
