/*!
 * Run Dialog
 * Launches apps, files and system commands from a single line of input
 */

use serde_json::json;
use tracing::{debug, info};

use super::types::{RunOutcome, SystemCommand};
use crate::api::SystemApi;
use crate::core::errors::SystemResult;
use crate::core::limits::{DEFAULT_SHELL_DIRECTORY, RUN_APP_ID};
use crate::monitoring::span_operation;
use crate::vfs::{paths, VfsPath};

/// Suggestions offered under the input box
pub const RECENT_COMMANDS: [&str; 5] = ["notepad", "paint", "cmd", "control-panel", "file-explorer"];

#[derive(Debug, Clone)]
pub struct RunDialog {
    api: SystemApi,
    /// Base for relative file paths
    base: VfsPath,
}

impl RunDialog {
    pub fn new(api: SystemApi) -> Self {
        let base = VfsPath::parse(DEFAULT_SHELL_DIRECTORY).unwrap_or_else(|_| VfsPath::root());
        Self { api, base }
    }

    pub fn recent_commands(&self) -> &'static [&'static str] {
        &RECENT_COMMANDS
    }

    /// Interpret `command` in order: app id, file path, system command
    ///
    /// Every recognized command closes the `run` window afterwards.
    /// Unrecognized input posts an error toast and leaves it open.
    pub fn run(&self, command: &str) -> SystemResult<RunOutcome> {
        let command = command.trim();
        if command.is_empty() {
            return Ok(RunOutcome::Empty);
        }

        let span = span_operation("run_command");
        let outcome = self.dispatch(command);
        span.record_result(matches!(outcome, Ok(ref o) if *o != RunOutcome::Unrecognized));

        if let Ok(ref result) = outcome {
            if *result != RunOutcome::Unrecognized {
                self.close();
            }
        }
        outcome
    }

    fn dispatch(&self, command: &str) -> SystemResult<RunOutcome> {
        let app_id = command.to_lowercase();
        if self.api.registry().contains(&app_id) {
            debug!(app_id = %app_id, "Run: opening app");
            return self.api.open_app(&app_id, json!({})).map(RunOutcome::OpenedApp);
        }

        if command.contains(|c| matches!(c, '\\' | '/' | '.')) {
            let path = match paths::resolve(&self.base, command) {
                Ok(path) => path,
                Err(e) => {
                    self.api.error(&e.to_string(), None);
                    return Err(e.into());
                }
            };
            debug!(path = %path, "Run: executing file");
            return self
                .api
                .execute_file(&path, json!({}))
                .map(RunOutcome::ExecutedFile);
        }

        if let Some(system) = SystemCommand::parse(command) {
            info!(command = ?system, "Run: system command");
            self.api.info(system.message(), None);
            return Ok(RunOutcome::System(system));
        }

        self.api.error(
            &format!("'{}' is not recognized as an internal or external command.", command),
            None,
        );
        Ok(RunOutcome::Unrecognized)
    }

    /// Close every open `run` window
    fn close(&self) {
        for instance in self.api.windows().instances_of(RUN_APP_ID) {
            if let Err(e) = self.api.close_app(instance.id.as_str()) {
                debug!(instance = %instance.id, error = %e, "Run window already closed");
            }
        }
    }
}
