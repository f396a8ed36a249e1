//! Read-only view of engine state for the presentation layer

use crate::format;
use crate::settings::SettingsField;
use crate::view::{Phase, QuitChoice, View};

/// Everything a renderer needs, copied out of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub view: View,
    pub work_remaining: i64,
    pub pause_remaining: i64,
    pub work_target: u32,
    pub pause_target: u32,
    pub auto_advance: bool,
    pub settings_cursor: SettingsField,
    pub quit_choice: QuitChoice,
    pub running: bool,
    /// Terminal size in cells; `(0, 0)` until the first resize arrives
    pub viewport: (u16, u16),
}

impl Snapshot {
    /// Seconds left in a phase
    pub fn remaining(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Work => self.work_remaining,
            Phase::Pause => self.pause_remaining,
        }
    }

    /// Configured minutes for a phase
    pub fn target(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_target,
            Phase::Pause => self.pause_target,
        }
    }

    /// `MM:SS` for the phase on screen, if a timer view is showing
    pub fn clock(&self) -> Option<String> {
        self.view.phase().map(|phase| format::clock(self.remaining(phase)))
    }

    /// Whether the viewport size is known yet
    pub fn has_viewport(&self) -> bool {
        self.viewport.0 > 0 && self.viewport.1 > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_clock_only_for_timer_views() {
        let engine = Engine::new(25, 5, false);
        let snap = engine.snapshot();
        assert_eq!(snap.clock().as_deref(), Some("25:00"));

        let snap = Snapshot {
            view: View::Settings,
            ..snap
        };
        assert_eq!(snap.clock(), None);
    }

    #[test]
    fn test_viewport_unknown_until_resize() {
        let snap = Engine::new(25, 5, false).snapshot();
        assert!(!snap.has_viewport());
        let snap = Snapshot {
            viewport: (80, 24),
            ..snap
        };
        assert!(snap.has_viewport());
    }
}
