//! Desktop notification backends

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::Command;

/// ASCII bell
const BEL: &[u8] = b"\x07";

/// A desktop notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    /// Ask the desktop to play its own sound as well
    pub sound: bool,
    /// Auto-dismiss timeout in seconds
    pub timeout: Option<u32>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: crate::DEFAULT_TITLE.to_string(),
            message: message.into(),
            sound: true,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// macOS terminal-notifier
    TerminalNotifier,
    /// macOS osascript
    Osascript,
    /// Linux notify-send
    NotifySend,
    /// Nothing to talk to; the bell is all we have
    BellOnly,
}

impl Backend {
    /// Detect the best available backend for the current platform
    pub fn detect() -> Self {
        #[cfg(target_os = "macos")]
        {
            if Self::command_exists("terminal-notifier") {
                return Self::TerminalNotifier;
            }
            return Self::Osascript;
        }

        #[cfg(target_os = "linux")]
        {
            if Self::command_exists("notify-send") {
                return Self::NotifySend;
            }
            return Self::BellOnly;
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            Self::BellOnly
        }
    }

    #[allow(dead_code)]
    fn command_exists(cmd: &str) -> bool {
        Command::new("which")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TerminalNotifier => "terminal-notifier",
            Self::Osascript => "osascript",
            Self::NotifySend => "notify-send",
            Self::BellOnly => "bell",
        }
    }

    /// Build the command that shows `notification`, if this backend has one
    pub fn command(&self, notification: &Notification) -> Option<Command> {
        match self {
            Self::TerminalNotifier => {
                let mut cmd = Command::new("terminal-notifier");
                cmd.args([
                    "-title",
                    &notification.title,
                    "-message",
                    &notification.message,
                    "-group",
                    "pomo",
                ]);
                if notification.sound {
                    cmd.args(["-sound", "default"]);
                }
                Some(cmd)
            }
            Self::Osascript => {
                let title = notification.title.replace('"', r#"\""#);
                let message = notification.message.replace('"', r#"\""#);
                let mut script =
                    format!(r#"display notification "{}" with title "{}""#, message, title);
                if notification.sound {
                    script.push_str(r#" sound name "default""#);
                }
                let mut cmd = Command::new("osascript");
                cmd.args(["-e", &script]);
                Some(cmd)
            }
            Self::NotifySend => {
                let mut cmd = Command::new("notify-send");
                cmd.args(["--app-name", "pomo"]);
                if let Some(timeout) = notification.timeout {
                    cmd.args(["--expire-time", &(timeout * 1000).to_string()]);
                }
                cmd.args([&notification.title, &notification.message]);
                Some(cmd)
            }
            Self::BellOnly => None,
        }
    }

    /// Show a notification, blocking until the helper process exits
    pub fn send(&self, notification: &Notification) -> Result<()> {
        let Some(mut cmd) = self.command(notification) else {
            return Ok(());
        };

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run {}", self.name()))?;
        if !status.success() {
            bail!("{} failed with status: {}", self.name(), status);
        }
        Ok(())
    }
}

/// Ring the terminal bell on stderr
pub fn ring_bell() -> Result<()> {
    let mut stderr = std::io::stderr().lock();
    stderr.write_all(BEL).context("Failed to ring bell")?;
    stderr.flush().context("Failed to flush bell")?;
    Ok(())
}
