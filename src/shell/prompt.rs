/*!
 * Command Prompt
 * DOS-style interpreter over the simulated drive
 */

use std::collections::BTreeMap;
use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;

use super::types::CommandOutcome;
use crate::api::SystemApi;
use crate::core::errors::SystemResult;
use crate::core::limits::{CMD_APP_ID, DEFAULT_SHELL_DIRECTORY};
use crate::core::types::InstanceId;
use crate::monitoring::span_operation;
use crate::vfs::{paths, FileSystemNode, VfsError, VfsPath};

pub const VERSION_BANNER: &str = "Microsoft Windows 98 [Version 4.10.1998]";
pub const COPYRIGHT_BANNER: &str = "(C) Copyright Microsoft Corp 1981-1998.";

const SYNTAX_ERROR: &str = "The syntax of the command is incorrect.";
const PATH_NOT_FOUND: &str = "The system cannot find the path specified.";
const FILE_NOT_FOUND: &str = "The system cannot find the file specified.";
const BAD_COMMAND: &str = "Bad command or file name";

const HELP_TEXT: &str = "For more information on a specific command, type HELP command-name
CD              Displays the name of or changes the current directory.
CHDIR           Displays the name of or changes the current directory.
CLS             Clears the screen.
COPY            Copies one or more files to another location.
DATE            Displays or sets the date.
DEL             Deletes one or more files.
DIR             Displays a list of files and subdirectories in a directory.
ECHO            Displays messages, or turns command echoing on or off.
ERASE           Deletes one or more files.
EXIT            Quits the CMD.EXE program (command interpreter).
HELP            Provides Help information for Windows commands.
MD              Creates a directory.
MKDIR           Creates a directory.
MOVE            Moves one or more files from one directory to another.
RD              Removes a directory.
RMDIR           Removes a directory.
SET             Displays, sets, or removes environment variables.
TIME            Displays or sets the system time.
TYPE            Displays the contents of a text file.
VER             Displays the Windows version.";

const LISTING_STAMP: &[FormatItem<'static>] =
    format_description!("[month]/[day]/[year repr:last_two]  [hour repr:12]:[minute] [period]");
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[month]/[day]/[year]");
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12]:[minute]:[second] [period]");

#[derive(Debug, Clone, Copy)]
enum Transfer {
    Copy,
    Move,
}

/// Command interpreter bound to one system
pub struct CommandPrompt {
    api: SystemApi,
    cwd: VfsPath,
    /// Upper-cased names
    variables: BTreeMap<String, String>,
    history: Vec<String>,
    /// Window closed by `exit`
    instance: Option<InstanceId>,
}

impl CommandPrompt {
    /// Detached prompt starting in `C:\My Documents`
    pub fn new(api: SystemApi) -> Self {
        let cwd = VfsPath::parse(DEFAULT_SHELL_DIRECTORY).unwrap_or_else(|_| VfsPath::root());
        let variables = [
            ("PATH", "C:\\WINDOWS;C:\\WINDOWS\\COMMAND"),
            ("PROMPT", "$P$G"),
            ("COMSPEC", "C:\\WINDOWS\\COMMAND.COM"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            api,
            cwd,
            variables,
            history: Vec::new(),
            instance: None,
        }
    }

    /// Open a `cmd` window and attach a prompt to it
    pub fn open(api: SystemApi) -> SystemResult<Self> {
        let instance = api.open_app(CMD_APP_ID, serde_json::json!({}))?;
        let mut prompt = Self::new(api);
        prompt.instance = Some(instance);
        Ok(prompt)
    }

    /// Startup banner lines
    pub fn banner() -> [&'static str; 2] {
        [VERSION_BANNER, COPYRIGHT_BANNER]
    }

    /// Prompt string such as `C:\My Documents>`
    pub fn prompt(&self) -> String {
        format!("{}>", self.cwd)
    }

    pub fn cwd(&self) -> &VfsPath {
        &self.cwd
    }

    pub fn instance(&self) -> Option<&InstanceId> {
        self.instance.as_ref()
    }

    /// Executed command lines, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Case-insensitive variable lookup
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Run one command line
    pub async fn execute(&mut self, line: &str) -> CommandOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandOutcome::default();
        }
        self.history.push(trimmed.to_string());

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (trimmed, ""),
        };
        let command = command.to_ascii_lowercase();
        let span = span_operation("shell_command");
        debug!(command = %command, "Executing shell command");

        // DOS shorthand: `cd..` and `cd\`
        if let Some(target) = command
            .strip_prefix("cd")
            .filter(|t| t.starts_with('.') || t.starts_with('\\'))
        {
            let target = target.to_string();
            return self.change_dir(Some(&target)).await;
        }

        let args = split_args(rest);
        let outcome = match command.as_str() {
            "help" => CommandOutcome::output(HELP_TEXT),
            "dir" => self.dir(args.first().map(String::as_str)).await,
            "cd" | "chdir" => self.change_dir(args.first().map(String::as_str)).await,
            "echo" => self.echo(rest),
            "set" => self.set(rest),
            "cls" => CommandOutcome {
                clear_screen: true,
                ..CommandOutcome::default()
            },
            "date" => CommandOutcome::output(format!("Current date is {}", now_formatted(DATE_FORMAT))),
            "time" => CommandOutcome::output(format!("Current time is {}", now_formatted(TIME_FORMAT))),
            "ver" => CommandOutcome::output(VERSION_BANNER),
            "type" => self.type_file(&args).await,
            "md" | "mkdir" => self.make_dir(&args).await,
            "rd" | "rmdir" => self.remove(&args, "Error removing directory").await,
            "del" | "erase" => self.remove(&args, "Error deleting file").await,
            "copy" => self.transfer(&args, Transfer::Copy).await,
            "move" => self.transfer(&args, Transfer::Move).await,
            "exit" => self.exit(),
            _ => CommandOutcome::error(BAD_COMMAND),
        };

        span.record_result(!outcome.is_error());
        outcome
    }

    fn resolve(&self, input: &str) -> Result<VfsPath, VfsError> {
        paths::resolve(&self.cwd, input)
    }

    async fn dir(&self, target: Option<&str>) -> CommandOutcome {
        let path = match target.map(|t| self.resolve(t)) {
            Some(Ok(path)) => path,
            Some(Err(_)) => return CommandOutcome::error("File Not Found"),
            None => self.cwd.clone(),
        };

        match self.api.list_directory(&path).await {
            Ok(items) => CommandOutcome::output(render_listing(&path, &items)),
            Err(_) => CommandOutcome::error("File Not Found"),
        }
    }

    async fn change_dir(&mut self, target: Option<&str>) -> CommandOutcome {
        let Some(target) = target else {
            return CommandOutcome::output(self.cwd.to_string());
        };

        let resolved = match self.resolve(target) {
            Ok(path) => path,
            Err(_) => return CommandOutcome::error(PATH_NOT_FOUND),
        };

        match self.api.list_directory(&resolved).await {
            Ok(_) => {
                debug!(from = %self.cwd, to = %resolved, "Changed directory");
                self.cwd = resolved;
                CommandOutcome::default()
            }
            Err(_) => CommandOutcome::error(PATH_NOT_FOUND),
        }
    }

    fn echo(&mut self, text: &str) -> CommandOutcome {
        if let Some((name, value)) = text.split_once('=') {
            self.assign(name, value);
            return CommandOutcome::default();
        }
        CommandOutcome::output(self.expand(text))
    }

    fn set(&mut self, text: &str) -> CommandOutcome {
        if text.is_empty() {
            let listing = self
                .variables
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandOutcome::output(listing);
        }

        if let Some((name, value)) = text.split_once('=') {
            self.assign(name, value);
            return CommandOutcome::default();
        }

        let name = text.trim();
        match self.variable(name) {
            Some(value) => CommandOutcome::output(format!("{}={}", name.to_ascii_uppercase(), value)),
            None => CommandOutcome::error(format!("Environment variable {} not defined", name)),
        }
    }

    /// `NAME=` with an empty value removes the variable
    fn assign(&mut self, name: &str, value: &str) {
        let name = name.trim().to_ascii_uppercase();
        if name.is_empty() {
            return;
        }
        if value.is_empty() {
            self.variables.remove(&name);
        } else {
            self.variables.insert(name, value.to_string());
        }
    }

    /// Replace `%NAME%` with defined variables; unknown names stay literal
    fn expand(&self, text: &str) -> String {
        let mut expanded = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('%') {
            expanded.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('%') else {
                expanded.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = &after[..end];
            match self.variable(name).filter(|_| !name.is_empty()) {
                Some(value) => {
                    expanded.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    expanded.push('%');
                    rest = after;
                }
            }
        }

        expanded.push_str(rest);
        expanded
    }

    async fn type_file(&self, args: &[String]) -> CommandOutcome {
        let Some(target) = args.first() else {
            return CommandOutcome::error(SYNTAX_ERROR);
        };
        let Ok(path) = self.resolve(target) else {
            return CommandOutcome::error(FILE_NOT_FOUND);
        };
        match self.api.read_file(&path).await {
            Ok(content) => CommandOutcome::output(content),
            Err(_) => CommandOutcome::error(FILE_NOT_FOUND),
        }
    }

    async fn make_dir(&self, args: &[String]) -> CommandOutcome {
        let Some(target) = args.first() else {
            return CommandOutcome::error(SYNTAX_ERROR);
        };
        let outcome = match self.resolve(target) {
            Ok(path) => self.api.create_directory(&path).await,
            Err(e) => Err(e.into()),
        };
        match outcome {
            Ok(()) => CommandOutcome::default(),
            Err(e) => CommandOutcome::error(format!("Error creating directory: {}", e)),
        }
    }

    async fn remove(&self, args: &[String], failure: &str) -> CommandOutcome {
        let Some(target) = args.first() else {
            return CommandOutcome::error(SYNTAX_ERROR);
        };
        let outcome = match self.resolve(target) {
            Ok(path) => self.api.delete_item(&path).await,
            Err(e) => Err(e.into()),
        };
        match outcome {
            Ok(()) => CommandOutcome::default(),
            Err(e) => CommandOutcome::error(format!("{}: {}", failure, e)),
        }
    }

    async fn transfer(&self, args: &[String], mode: Transfer) -> CommandOutcome {
        let [source, destination] = args else {
            return CommandOutcome::error(SYNTAX_ERROR);
        };

        let outcome = self.run_transfer(source, destination, mode).await;
        match (mode, outcome) {
            (Transfer::Copy, Ok(())) => CommandOutcome::output("        1 file(s) copied."),
            (Transfer::Move, Ok(())) => CommandOutcome::output("        1 file(s) moved."),
            (Transfer::Copy, Err(e)) => CommandOutcome::error(format!("Error copying file: {}", e)),
            (Transfer::Move, Err(e)) => CommandOutcome::error(format!("Error moving file: {}", e)),
        }
    }

    async fn run_transfer(&self, source: &str, destination: &str, mode: Transfer) -> SystemResult<()> {
        let source = self.resolve(source)?;
        let mut destination = self.resolve(destination)?;

        // A folder destination receives the item under its own name
        if let Ok(node) = self.api.metadata(&destination).await {
            if node.is_folder() {
                if let Some(name) = source.name() {
                    destination = destination.join(name)?;
                }
            }
        }

        match mode {
            Transfer::Copy => self.api.copy_item(&source, &destination).await,
            Transfer::Move => self.api.move_item(&source, &destination).await,
        }
    }

    fn exit(&mut self) -> CommandOutcome {
        if let Some(instance) = self.instance.take() {
            if let Err(e) = self.api.close_app(instance.as_str()) {
                debug!(instance = %instance, error = %e, "Prompt window already closed");
            }
        }
        CommandOutcome {
            exit: true,
            ..CommandOutcome::default()
        }
    }
}

/// Split arguments on whitespace, honouring double quotes
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

fn format_time(time: SystemTime, format: &[FormatItem<'_>]) -> String {
    OffsetDateTime::from(time).format(format).unwrap_or_default()
}

fn now_formatted(format: &[FormatItem<'_>]) -> String {
    format_time(SystemTime::now(), format)
}

/// `dir` output for a folder listing
fn render_listing(path: &VfsPath, items: &[FileSystemNode]) -> String {
    let mut lines = vec![
        " Volume in drive C is WINDOWS98".to_string(),
        " Volume Serial Number is 1234-ABCD".to_string(),
        String::new(),
        format!(" Directory of {}", path),
        String::new(),
    ];

    let mut files = 0usize;
    let mut dirs = 0usize;
    let mut total = 0usize;

    for item in items {
        let stamp = format_time(item.modified(), LISTING_STAMP);
        match item.size() {
            None => {
                lines.push(format!("{}        <DIR>          {}", stamp, item.name()));
                dirs += 1;
            }
            Some(size) => {
                lines.push(format!("{} {:>10} {}", stamp, size, item.name()));
                files += 1;
                total += size;
            }
        }
    }

    lines.push(format!("               {} file(s)         {} bytes", files, total));
    lines.push(format!("               {} dir(s)      1,457,664 bytes free", dirs));
    lines.join("\n")
}

impl std::fmt::Debug for CommandPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandPrompt")
            .field("cwd", &self.cwd.to_string())
            .field("instance", &self.instance)
            .field("history", &self.history.len())
            .finish()
    }
}
