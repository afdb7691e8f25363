use std::collections::VecDeque;

use super::GridCoord;

/// One recorded carve: a pair of grid-space coordinates describing what
/// changed (a cell, a wall, or both in a single step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveStep {
    pub primary: GridCoord,
    pub secondary: GridCoord,
}

/// Append-only log of carve steps for animation replay.
///
/// Bounded: once `max_steps` entries are held, the oldest is evicted on the
/// next record. Recording is off by default; generation switches it on only
/// when the caller asked for animation.
#[derive(Debug)]
pub struct CarveHistory {
    steps: VecDeque<CarveStep>,
    /// Maximum number of steps to keep. If 0, no history is kept.
    max_steps: usize,
    recording: bool,
}

impl CarveHistory {
    pub fn new(max_steps: usize) -> Self {
        CarveHistory {
            steps: VecDeque::new(),
            max_steps,
            recording: false,
        }
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn record(&mut self, step: CarveStep) {
        if !self.recording || self.max_steps == 0 {
            return;
        }
        // Evict oldest entries once the cap is reached
        if self.steps.len() == self.max_steps {
            self.steps.pop_front();
        }
        self.steps.push_back(step);
    }

    /// Single-pass replay: drains the log oldest-first.
    pub fn drain(&mut self) -> impl Iterator<Item = CarveStep> {
        self.steps.drain(..)
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.steps.shrink_to_fit();
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
