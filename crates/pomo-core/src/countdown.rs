//! Countdown counters for the work and pause phases
//!
//! Targets are whole minutes in `[MIN_MINUTES, MAX_MINUTES]`. Remaining time is
//! kept in signed seconds: a counter dips to `-1` for exactly one tick, which is
//! the rollover signal, and is reset straight away.

use crate::view::Phase;

/// Smallest configurable phase length in minutes
pub const MIN_MINUTES: u32 = 1;
/// Largest configurable phase length in minutes
pub const MAX_MINUTES: u32 = 60;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_PAUSE_MINUTES: u32 = 5;

/// Clamp a minute value into the configurable range
pub fn clamp_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_MINUTES, MAX_MINUTES)
}

fn minutes_to_secs(minutes: u32) -> i64 {
    i64::from(minutes) * 60
}

/// Result of advancing a counter by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still at or above zero
    Counting,
    /// Went below zero; the phase is complete
    Expired,
}

/// Work and pause targets with their remaining time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    work_target: u32,
    pause_target: u32,
    work_remaining: i64,
    pause_remaining: i64,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_PAUSE_MINUTES)
    }
}

impl Countdown {
    /// Create counters with both phases full. Targets are clamped.
    pub fn new(work_minutes: u32, pause_minutes: u32) -> Self {
        let mut countdown = Self {
            work_target: clamp_minutes(work_minutes),
            pause_target: clamp_minutes(pause_minutes),
            work_remaining: 0,
            pause_remaining: 0,
        };
        countdown.reset();
        countdown
    }

    /// Configured length of a phase in minutes
    pub fn target(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_target,
            Phase::Pause => self.pause_target,
        }
    }

    /// Seconds left in a phase
    pub fn remaining(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Work => self.work_remaining,
            Phase::Pause => self.pause_remaining,
        }
    }

    fn remaining_mut(&mut self, phase: Phase) -> &mut i64 {
        match phase {
            Phase::Work => &mut self.work_remaining,
            Phase::Pause => &mut self.pause_remaining,
        }
    }

    /// Take one second off `phase`
    pub fn tick(&mut self, phase: Phase) -> TickOutcome {
        let remaining = self.remaining_mut(phase);
        *remaining -= 1;
        if *remaining < 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Counting
        }
    }

    /// Refill both counters from their targets
    pub fn reset(&mut self) {
        self.work_remaining = minutes_to_secs(self.work_target);
        self.pause_remaining = minutes_to_secs(self.pause_target);
    }

    /// Change a phase's target and refill that phase's counter.
    ///
    /// Returns the clamped value that was stored.
    pub fn set_target(&mut self, phase: Phase, minutes: u32) -> u32 {
        let minutes = clamp_minutes(minutes);
        match phase {
            Phase::Work => self.work_target = minutes,
            Phase::Pause => self.pause_target = minutes,
        }
        *self.remaining_mut(phase) = minutes_to_secs(minutes);
        minutes
    }

    /// Add a minute to a target, saturating at [`MAX_MINUTES`]
    pub fn increment(&mut self, phase: Phase) -> u32 {
        let next = self.target(phase).saturating_add(1);
        self.set_target(phase, next)
    }

    /// Remove a minute from a target, saturating at [`MIN_MINUTES`]
    pub fn decrement(&mut self, phase: Phase) -> u32 {
        let next = self.target(phase).saturating_sub(1);
        self.set_target(phase, next)
    }
}
