//! Application state: the engine plus presentation-only extras

use pomo_core::{Cmd, Config, Engine, Msg, Phase, Snapshot, View};
use rand::seq::SliceRandom;

const WORK_TITLES: [&str; 8] = [
    "beast mode",
    "flow state",
    "focus zone",
    "deep work",
    "laser focus",
    "hustle hard",
    "zone mode",
    "turbo mode",
];

const PAUSE_TITLES: [&str; 8] = [
    "chill zone",
    "recharge",
    "breathe",
    "refresh",
    "stretch it out",
    "coffee time",
    "take five",
    "cool down",
];

/// Pick a random banner for a phase, e.g. "- deep work -"
pub fn mode_title(phase: Phase) -> String {
    let titles = match phase {
        Phase::Work => &WORK_TITLES,
        Phase::Pause => &PAUSE_TITLES,
    };
    let title = titles.choose(&mut rand::thread_rng()).copied().unwrap_or_default();
    format!("- {} -", title)
}

/// Application state
pub struct App {
    engine: Engine,
    /// Banner under the clock, re-rolled on every phase change
    pub title: String,
    last_view: View,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let engine = Engine::from_config(config);
        let last_view = engine.view();
        Self {
            engine,
            title: mode_title(Phase::Work),
            last_view,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Feed a message to the engine and return its effects
    pub fn handle(&mut self, msg: Msg) -> Cmd {
        let cmd = self.engine.update(msg);

        let view = self.engine.view();
        if view != self.last_view {
            // Closing the quit dialog goes back to the same screen, keep the banner
            if let Some(phase) = view.phase() {
                if self.last_view != View::Quit {
                    self.title = mode_title(phase);
                }
            }
            self.last_view = view;
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomo_core::Input;

    #[test]
    fn test_mode_title_comes_from_phase_list() {
        for _ in 0..20 {
            let title = mode_title(Phase::Pause);
            let inner = title.trim_start_matches("- ").trim_end_matches(" -");
            assert!(PAUSE_TITLES.contains(&inner));
        }
    }

    #[test]
    fn test_title_changes_with_phase() {
        let mut app = App::new(&Config::default());
        app.handle(Msg::Input(Input::GoPause));
        let inner = app.title.trim_start_matches("- ").trim_end_matches(" -").to_string();
        assert!(PAUSE_TITLES.contains(&inner.as_str()));
    }

    #[test]
    fn test_title_kept_across_quit_dialog() {
        let mut app = App::new(&Config::default());
        let before = app.title.clone();
        app.handle(Msg::Input(Input::QuitRequest));
        app.handle(Msg::Input(Input::Cancel));
        assert_eq!(app.title, before);
    }

    #[test]
    fn test_handle_passes_commands_through() {
        let mut app = App::new(&Config::default());
        let cmd = app.handle(Msg::Input(Input::ToggleRun));
        assert!(matches!(cmd, Cmd::ScheduleTick(_)));
        assert!(app.snapshot().running);
    }
}
