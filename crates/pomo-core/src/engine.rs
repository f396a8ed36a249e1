//! The timer state machine
//!
//! [`Engine::update`] takes the engine by exclusive reference and a [`Msg`],
//! mutates state in place and returns a [`Cmd`] for the host. It performs no
//! I/O: tick scheduling, notifications and process exit are all described as
//! commands and carried out by whoever owns the engine.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::countdown::{Countdown, TickOutcome};
use crate::settings::{SettingsEditor, SettingsField};
use crate::snapshot::Snapshot;
use crate::view::{Phase, QuitChoice, View};

/// Delay between a tick request and the tick it produces
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Symbolic user commands. Key bindings live in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    QuitRequest,
    Confirm,
    Cancel,
    NavLeft,
    NavRight,
    NavUp,
    NavDown,
    OpenSettings,
    GoWork,
    GoPause,
    ToggleRun,
    Reset,
}

/// Everything the host can deliver to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Input(Input),
    /// One second has elapsed since the last tick request
    Tick,
    Resize { width: u16, height: u16 },
}

impl From<Input> for Msg {
    fn from(input: Input) -> Self {
        Msg::Input(input)
    }
}

/// Signal raised when a phase runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCompleted {
    pub finished: Phase,
}

impl PhaseCompleted {
    /// The phase the timer moved on to
    pub fn next(&self) -> Phase {
        self.finished.other()
    }
}

/// Side effects requested by [`Engine::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    None,
    /// Deliver exactly one [`Msg::Tick`] after the given delay
    ScheduleTick(Duration),
    /// Hand the signal to the notification consumer and move on
    Notify(PhaseCompleted),
    /// The user confirmed quitting
    Quit,
    Batch(Vec<Cmd>),
}

impl Cmd {
    fn batch(cmds: Vec<Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten into the individual effects, in order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}

/// Timer engine state
#[derive(Debug, Clone)]
pub struct Engine {
    countdown: Countdown,
    view: View,
    /// Where Settings and Quit return to; only read while one of them is open
    previous_view: View,
    running: bool,
    auto_advance: bool,
    quit_choice: QuitChoice,
    settings: SettingsEditor,
    viewport: (u16, u16),
    /// A tick request has been handed out and its tick has not arrived yet
    tick_pending: bool,
    terminated: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Engine {
    /// Create a stopped engine in the work view with both counters full
    pub fn new(work_minutes: u32, pause_minutes: u32, auto_advance: bool) -> Self {
        Self {
            countdown: Countdown::new(work_minutes, pause_minutes),
            view: View::Work,
            previous_view: View::Work,
            running: false,
            auto_advance,
            quit_choice: QuitChoice::Cancel,
            settings: SettingsEditor::new(),
            viewport: (0, 0),
            tick_pending: false,
            terminated: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.work_minutes, config.pause_minutes, config.auto_advance)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn previous_view(&self) -> View {
        self.previous_view
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn quit_choice(&self) -> QuitChoice {
        self.quit_choice
    }

    pub fn settings_cursor(&self) -> SettingsField {
        self.settings.cursor()
    }

    pub fn tick_pending(&self) -> bool {
        self.tick_pending
    }

    /// True once a quit has been confirmed; the engine ignores everything after
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.view,
            work_remaining: self.countdown.remaining(Phase::Work),
            pause_remaining: self.countdown.remaining(Phase::Pause),
            work_target: self.countdown.target(Phase::Work),
            pause_target: self.countdown.target(Phase::Pause),
            auto_advance: self.auto_advance,
            settings_cursor: self.settings.cursor(),
            quit_choice: self.quit_choice,
            running: self.running,
            viewport: self.viewport,
        }
    }

    /// Apply a message and return the effects the host must carry out
    pub fn update(&mut self, msg: Msg) -> Cmd {
        if self.terminated {
            return Cmd::None;
        }

        match msg {
            Msg::Tick => self.on_tick(),
            Msg::Resize { width, height } => {
                self.viewport = (width, height);
                Cmd::None
            }
            Msg::Input(input) => self.on_input(input),
        }
    }

    fn on_tick(&mut self) -> Cmd {
        self.tick_pending = false;

        // Ticks that land after a stop, or inside Settings/Quit, fall through.
        let Some(phase) = self.view.phase() else {
            return Cmd::None;
        };
        if !self.running {
            return Cmd::None;
        }

        let mut cmds = Vec::with_capacity(2);
        if self.countdown.tick(phase) == TickOutcome::Expired {
            cmds.push(self.complete_phase(phase));
        }
        cmds.push(self.request_tick());
        Cmd::batch(cmds)
    }

    fn complete_phase(&mut self, finished: Phase) -> Cmd {
        info!(
            phase = finished.as_str(),
            auto_advance = self.auto_advance,
            "phase completed"
        );

        self.countdown.reset();
        self.running = false;
        self.switch_to(finished.other().into());
        if self.auto_advance {
            self.running = true;
        }

        Cmd::Notify(PhaseCompleted { finished })
    }

    /// Ask for the next tick unless one is already on its way
    fn request_tick(&mut self) -> Cmd {
        if self.running && self.view.phase().is_some() && !self.tick_pending {
            self.tick_pending = true;
            Cmd::ScheduleTick(TICK_INTERVAL)
        } else {
            Cmd::None
        }
    }

    fn switch_to(&mut self, view: View) {
        debug!(from = self.view.as_str(), to = view.as_str(), "switching view");
        self.previous_view = self.view;
        self.view = view;
    }

    fn on_input(&mut self, input: Input) -> Cmd {
        match input {
            Input::QuitRequest => self.open_quit(),
            Input::Confirm => self.confirm(),
            Input::Cancel => self.cancel(),
            Input::NavLeft => self.nav_left(),
            Input::NavRight => self.nav_right(),
            Input::NavUp => {
                if self.view == View::Settings {
                    self.settings.increment(&mut self.countdown);
                }
                Cmd::None
            }
            Input::NavDown => {
                if self.view == View::Settings {
                    self.settings.decrement(&mut self.countdown);
                }
                Cmd::None
            }
            Input::OpenSettings => self.open_settings(),
            Input::GoWork => self.go_phase(Phase::Work),
            Input::GoPause => self.go_phase(Phase::Pause),
            Input::ToggleRun => self.toggle_run(),
            Input::Reset => self.reset(),
        }
    }

    fn open_quit(&mut self) -> Cmd {
        if self.view == View::Quit {
            return Cmd::None;
        }
        self.switch_to(View::Quit);
        self.quit_choice = QuitChoice::Cancel;
        Cmd::None
    }

    fn leave_quit(&mut self) -> Cmd {
        self.view = self.previous_view;
        // Ticks that arrived while the dialog was open were not renewed.
        self.request_tick()
    }

    fn confirm(&mut self) -> Cmd {
        match self.view {
            View::Quit => match self.quit_choice {
                QuitChoice::Confirm => {
                    info!("quit confirmed");
                    self.terminated = true;
                    Cmd::Quit
                }
                QuitChoice::Cancel => self.leave_quit(),
            },
            View::Settings => {
                self.switch_to(View::Work);
                Cmd::None
            }
            View::Work | View::Pause => Cmd::None,
        }
    }

    fn cancel(&mut self) -> Cmd {
        if self.view == View::Quit {
            self.leave_quit()
        } else {
            Cmd::None
        }
    }

    fn nav_left(&mut self) -> Cmd {
        match self.view {
            View::Quit => self.quit_choice = QuitChoice::Cancel,
            View::Settings => self.settings.move_left(),
            View::Work | View::Pause => {}
        }
        Cmd::None
    }

    fn nav_right(&mut self) -> Cmd {
        match self.view {
            View::Quit => self.quit_choice = QuitChoice::Confirm,
            View::Settings => self.settings.move_right(),
            View::Work | View::Pause => {}
        }
        Cmd::None
    }

    fn open_settings(&mut self) -> Cmd {
        if self.view == View::Settings {
            return Cmd::None;
        }
        self.running = false;
        self.switch_to(View::Settings);
        self.settings.focus_first();
        Cmd::None
    }

    fn go_phase(&mut self, phase: Phase) -> Cmd {
        self.running = false;
        self.switch_to(phase.into());
        Cmd::None
    }

    fn toggle_run(&mut self) -> Cmd {
        match self.view {
            View::Work | View::Pause => {
                self.running = !self.running;
                debug!(running = self.running, "toggled timer");
                self.request_tick()
            }
            View::Settings => {
                if self.settings.toggle(&mut self.auto_advance) {
                    debug!(auto_advance = self.auto_advance, "toggled auto-advance");
                }
                Cmd::None
            }
            View::Quit => Cmd::None,
        }
    }

    fn reset(&mut self) -> Cmd {
        if self.view.phase().is_some() {
            self.countdown.reset();
            self.running = false;
        }
        Cmd::None
    }
}
