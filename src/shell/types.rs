/*!
 * Shell Types
 * Console lines and command results
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::InstanceId;

/// Console line category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Output,
    Error,
}

/// One line (possibly multi-line text) written to the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellLine {
    pub kind: LineKind,
    pub text: String,
}

impl ShellLine {
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == LineKind::Error
    }
}

impl fmt::Display for ShellLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of one command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub lines: Vec<ShellLine>,
    /// `cls` was run
    pub clear_screen: bool,
    /// `exit` was run
    pub exit: bool,
}

impl CommandOutcome {
    pub(super) fn output(text: impl Into<String>) -> Self {
        Self {
            lines: vec![ShellLine::output(text)],
            ..Self::default()
        }
    }

    pub(super) fn error(text: impl Into<String>) -> Self {
        Self {
            lines: vec![ShellLine::error(text)],
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.lines.iter().any(ShellLine::is_error)
    }

    /// All line texts joined with newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Built-in Run dialog system commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemCommand {
    Shutdown,
    Restart,
    Logoff,
}

impl SystemCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command.to_ascii_lowercase().as_str() {
            "shutdown" => Some(Self::Shutdown),
            "restart" => Some(Self::Restart),
            "logoff" => Some(Self::Logoff),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Shutdown => "Windows is shutting down...",
            Self::Restart => "Windows is restarting...",
            Self::Logoff => "User logoff initiated (simulated)",
        }
    }
}

/// What the Run dialog did with its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Blank input, nothing happened
    Empty,
    /// A registered app was opened
    OpenedApp(InstanceId),
    /// A file was handed to its associated app (`None` when no app matched)
    ExecutedFile(Option<InstanceId>),
    /// Shutdown, restart or logoff
    System(SystemCommand),
    /// Not an app, a path or a system command
    Unrecognized,
}
