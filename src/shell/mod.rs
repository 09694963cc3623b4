/*!
 * Shell
 * Command Prompt and Run dialog front-ends
 */

pub mod prompt;
pub mod run;
pub mod types;

pub use prompt::{CommandPrompt, COPYRIGHT_BANNER, VERSION_BANNER};
pub use run::{RunDialog, RECENT_COMMANDS};
pub use types::{CommandOutcome, LineKind, RunOutcome, ShellLine, SystemCommand};
