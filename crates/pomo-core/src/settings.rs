//! Settings editor
//!
//! Three fields in a fixed order: work minutes, pause minutes and the
//! auto-advance checkbox. Edits are applied directly to the live countdown,
//! there is no draft copy to commit.

use crate::countdown::Countdown;
use crate::view::Phase;

/// An editable field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    WorkMinutes,
    PauseMinutes,
    AutoAdvance,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [Self::WorkMinutes, Self::PauseMinutes, Self::AutoAdvance];

    pub fn index(self) -> usize {
        match self {
            Self::WorkMinutes => 0,
            Self::PauseMinutes => 1,
            Self::AutoAdvance => 2,
        }
    }

    /// Field to the left, stopping at the first one
    pub fn left(self) -> Self {
        match self {
            Self::WorkMinutes | Self::PauseMinutes => Self::WorkMinutes,
            Self::AutoAdvance => Self::PauseMinutes,
        }
    }

    /// Field to the right, stopping at the last one
    pub fn right(self) -> Self {
        match self {
            Self::WorkMinutes => Self::PauseMinutes,
            Self::PauseMinutes | Self::AutoAdvance => Self::AutoAdvance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WorkMinutes => "Work",
            Self::PauseMinutes => "Pause",
            Self::AutoAdvance => "Auto Mode",
        }
    }

    /// The phase whose target this field edits, for numeric fields
    pub fn phase(self) -> Option<Phase> {
        match self {
            Self::WorkMinutes => Some(Phase::Work),
            Self::PauseMinutes => Some(Phase::Pause),
            Self::AutoAdvance => None,
        }
    }
}

/// Cursor over the settings fields plus the edit operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsEditor {
    cursor: SettingsField,
}

impl SettingsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused field
    pub fn cursor(&self) -> SettingsField {
        self.cursor
    }

    /// Focus the first field, as on every entry into settings
    pub fn focus_first(&mut self) {
        self.cursor = SettingsField::WorkMinutes;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.left();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.cursor.right();
    }

    /// Raise the focused numeric target by a minute.
    ///
    /// Returns the new target, or `None` when the checkbox is focused.
    pub fn increment(&self, countdown: &mut Countdown) -> Option<u32> {
        self.cursor.phase().map(|phase| countdown.increment(phase))
    }

    /// Lower the focused numeric target by a minute
    pub fn decrement(&self, countdown: &mut Countdown) -> Option<u32> {
        self.cursor.phase().map(|phase| countdown.decrement(phase))
    }

    /// Flip the checkbox if it is focused. Returns whether anything changed.
    pub fn toggle(&self, auto_advance: &mut bool) -> bool {
        if self.cursor != SettingsField::AutoAdvance {
            return false;
        }
        *auto_advance = !*auto_advance;
        true
    }
}
