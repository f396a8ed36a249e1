//! pomo-notify - Completion chime for pomo
//!
//! The engine raises a [`PhaseCompleted`] signal and moves on. A [`Chime`]
//! hands that signal to a worker task which rings the terminal bell and shows
//! a desktop notification. Nothing flows back: delivery failures are logged
//! here and never reach the engine.

mod backend;

pub use backend::{ring_bell, Backend, Notification};

use pomo_core::{Config, Phase, PhaseCompleted};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Default notification title
pub const DEFAULT_TITLE: &str = "Pomo";

/// Which outputs the chime uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChimeOptions {
    pub bell: bool,
    pub desktop: bool,
}

impl Default for ChimeOptions {
    fn default() -> Self {
        Self {
            bell: true,
            desktop: true,
        }
    }
}

impl From<&Config> for ChimeOptions {
    fn from(config: &Config) -> Self {
        Self {
            bell: config.bell,
            desktop: config.desktop_notifications,
        }
    }
}

/// The desktop notification shown for a completed phase
pub fn notification_for(signal: &PhaseCompleted) -> Notification {
    let message = match signal.finished {
        Phase::Work => "Work session done - time for a break",
        Phase::Pause => "Break over - back to work",
    };
    Notification::new(message).with_timeout(5)
}

/// Sending half of the chime worker
#[derive(Clone)]
pub struct Chime {
    tx: mpsc::UnboundedSender<PhaseCompleted>,
}

impl Chime {
    /// Start a worker on `handle` using the detected desktop backend
    pub fn spawn(handle: &Handle, options: ChimeOptions) -> Self {
        let backend = if options.desktop {
            Backend::detect()
        } else {
            Backend::BellOnly
        };
        debug!(backend = backend.name(), bell = options.bell, "chime ready");

        Self::spawn_with(handle, move |signal| {
            deliver(backend, options.bell, &notification_for(&signal));
        })
    }

    /// Start a worker that calls `consumer` on a blocking thread per signal
    pub fn spawn_with<F>(handle: &Handle, consumer: F) -> Self
    where
        F: Fn(PhaseCompleted) + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<PhaseCompleted>();
        let consumer = Arc::new(consumer);

        handle.spawn(async move {
            while let Some(signal) = rx.recv().await {
                let consumer = Arc::clone(&consumer);
                tokio::task::spawn_blocking(move || (*consumer)(signal));
            }
        });

        Self { tx }
    }

    /// Queue a signal. Never blocks.
    pub fn ring(&self, signal: PhaseCompleted) {
        if self.tx.send(signal).is_err() {
            warn!(phase = signal.finished.as_str(), "chime worker is gone, dropping signal");
        }
    }
}

fn deliver(backend: Backend, bell: bool, notification: &Notification) {
    if bell {
        if let Err(e) = ring_bell() {
            warn!(error = %e, "bell failed");
        }
    }

    if let Err(e) = backend.send(notification) {
        warn!(backend = backend.name(), error = %e, "desktop notification failed");
    }
}
