//! Views, phases and the quit dialog selection

/// One of the two timed intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Pause,
}

impl Phase {
    /// The phase that follows this one on rollover
    pub fn other(self) -> Self {
        match self {
            Self::Work => Self::Pause,
            Self::Pause => Self::Work,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Pause => "pause",
        }
    }
}

/// The screen the engine is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Work,
    Pause,
    Settings,
    Quit,
}

impl View {
    /// The phase shown by this view, if it is a timer view
    pub fn phase(self) -> Option<Phase> {
        match self {
            Self::Work => Some(Phase::Work),
            Self::Pause => Some(Phase::Pause),
            Self::Settings | Self::Quit => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Pause => "pause",
            Self::Settings => "settings",
            Self::Quit => "quit",
        }
    }
}

impl From<Phase> for View {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Work => Self::Work,
            Phase::Pause => Self::Pause,
        }
    }
}

/// Selection in the quit confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitChoice {
    /// "No" - return to the previous view
    #[default]
    Cancel,
    /// "Yes" - terminate
    Confirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_other_flips() {
        assert_eq!(Phase::Work.other(), Phase::Pause);
        assert_eq!(Phase::Pause.other(), Phase::Work);
    }

    #[test]
    fn test_view_phase_mapping() {
        assert_eq!(View::Work.phase(), Some(Phase::Work));
        assert_eq!(View::Pause.phase(), Some(Phase::Pause));
        assert_eq!(View::Settings.phase(), None);
        assert_eq!(View::Quit.phase(), None);
        assert_eq!(View::from(Phase::Pause), View::Pause);
    }
}
