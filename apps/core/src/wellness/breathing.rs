//! 4-7-8 breathing timer.
//!
//! Driven by one `tick` per second from the caller; the timer itself never
//! sleeps, so it can be stepped deterministically.

use serde::Serialize;
use std::fmt;

/// Phase of one breathing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Length of the phase in counts (seconds)
    pub fn count(&self) -> u32 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 7,
            BreathPhase::Exhale => 8,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe Out",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

/// State of a guided breathing exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingExercise {
    active: bool,
    phase: BreathPhase,
    remaining: u32,
    /// Completed inhale-hold-exhale cycles
    cycle: u32,
}

impl Default for BreathingExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingExercise {
    pub fn new() -> Self {
        Self {
            active: false,
            phase: BreathPhase::Inhale,
            remaining: BreathPhase::Inhale.count(),
            cycle: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn completed_cycles(&self) -> u32 {
        self.cycle
    }

    /// Start or pause
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one count.
    ///
    /// Returns the new phase when the tick crossed a phase boundary. Ticks
    /// while paused change nothing.
    pub fn tick(&mut self) -> Option<BreathPhase> {
        if !self.active {
            return None;
        }

        if self.remaining > 1 {
            self.remaining -= 1;
            return None;
        }

        if self.phase == BreathPhase::Exhale {
            self.cycle += 1;
        }
        self.phase = self.phase.next();
        self.remaining = self.phase.count();
        Some(self.phase)
    }
}

impl fmt::Display for BreathingExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}  {:<11} (cycle {})",
            self.remaining,
            self.phase.text(),
            self.cycle + 1
        )
    }
}
