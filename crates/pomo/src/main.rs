//! pomo - Terminal work/pause interval timer
//!
//! "Work, breathe, repeat."
//!
//! Host loop for the timer engine: reads keys and resizes from the terminal,
//! turns tick requests into one-shot deadlines, hands completion signals to the
//! chime worker and redraws after every message.

mod app;
mod glyphs;
mod keymap;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use pomo_core::{Cmd, Config, Msg, Paths};
use pomo_notify::{Chime, ChimeOptions};
use ratatui::prelude::*;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// How long to wait for input when no tick is due
const IDLE_POLL: Duration = Duration::from_secs(1);

/// How long a pending chime may hold up exit
const CHIME_GRACE: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "Terminal work/pause interval timer")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    pomo                    # 25 min work, 5 min pause
    pomo --work 50 -p 10    # Longer cycle
    pomo --auto             # Roll straight into the next phase

KEY BINDINGS:
    Space       Start/stop the timer (toggle checkbox in settings)
    w / p       Switch to work / pause (stops the timer)
    r           Reset both counters
    s           Open settings
    Left/Right  Move between fields or dialog buttons
    Up/Down     Add/remove a minute in settings
    Enter       Save settings / confirm
    Esc, n      Cancel quit
    q, Ctrl+C   Quit

CONFIG:
    Startup defaults are read from ~/.config/pomo/config.json:
    {"work_minutes": 25, "pause_minutes": 5, "auto_advance": false,
     "bell": true, "desktop_notifications": true}
    Changes made in the settings view are not saved.

LOGGING:
    Logs go to ~/.local/share/pomo/pomo.log. Set RUST_LOG=debug for more."#)]
struct Args {
    /// Work phase length in minutes (1-60)
    #[arg(short, long, value_name = "MINS")]
    work: Option<u32>,

    /// Pause phase length in minutes (1-60)
    #[arg(short, long, value_name = "MINS")]
    pause: Option<u32>,

    /// Start the next phase automatically when one completes
    #[arg(short, long)]
    auto: bool,

    /// Don't ring the terminal bell on completion
    #[arg(long)]
    no_bell: bool,

    /// Don't raise desktop notifications on completion
    #[arg(long)]
    no_desktop: bool,

    /// Config file to read instead of the default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file to write instead of the default
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let paths = Paths::new();

    let log_path = args.log_file.clone().unwrap_or_else(|| paths.log_file());
    init_logging(&log_path)?;

    let config = load_config(&args, &paths)?;
    info!(
        work = config.work_minutes,
        pause = config.pause_minutes,
        auto_advance = config.auto_advance,
        "starting pomo"
    );

    // The chime worker lives on this runtime; the UI loop itself is synchronous
    let rt = Runtime::new().context("Failed to start async runtime")?;
    let chime = Chime::spawn(rt.handle(), ChimeOptions::from(&config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Pomo"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app, &chime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    shutdown_chime(rt);

    if let Err(err) = result {
        tracing::error!(error = %err, "pomo exited with an error");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    info!("bye");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Stop the chime runtime without waiting on notification helpers that hang
fn shutdown_chime(rt: Runtime) {
    rt.shutdown_timeout(CHIME_GRACE);
}

/// Config file values with command-line overrides applied
fn load_config(args: &Args, paths: &Paths) -> Result<Config> {
    let path = args.config.clone().unwrap_or_else(|| paths.config_file());
    let mut config = Config::load(&path).context("Failed to load configuration")?;

    if let Some(work) = args.work {
        config.work_minutes = work;
    }
    if let Some(pause) = args.pause {
        config.pause_minutes = pause;
    }
    if args.auto {
        config.auto_advance = true;
    }
    if args.no_bell {
        config.bell = false;
    }
    if args.no_desktop {
        config.desktop_notifications = false;
    }

    Ok(config.normalized())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, chime: &Chime) -> Result<()> {
    let size = terminal.size()?;
    app.handle(Msg::Resize {
        width: size.width,
        height: size.height,
    });

    // At most one tick is ever outstanding
    let mut next_tick: Option<Instant> = None;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = next_tick
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let msg = match event::read()? {
                Event::Key(key) => keymap::input_for(key).map(Msg::Input),
                Event::Resize(width, height) => Some(Msg::Resize { width, height }),
                _ => None,
            };
            if let Some(msg) = msg {
                if dispatch(app, msg, &mut next_tick, chime) {
                    return Ok(());
                }
            }
        }

        if next_tick.is_some_and(|at| Instant::now() >= at) {
            next_tick = None;
            if dispatch(app, Msg::Tick, &mut next_tick, chime) {
                return Ok(());
            }
        }
    }
}

/// Run a message through the app and carry out its commands.
///
/// Returns true once a quit has been confirmed.
fn dispatch(app: &mut App, msg: Msg, next_tick: &mut Option<Instant>, chime: &Chime) -> bool {
    let mut quit = false;
    for cmd in app.handle(msg).into_vec() {
        match cmd {
            Cmd::ScheduleTick(delay) => *next_tick = Some(Instant::now() + delay),
            Cmd::Notify(signal) => chime.ring(signal),
            Cmd::Quit => quit = true,
            Cmd::None | Cmd::Batch(_) => {}
        }
    }
    quit
}
