//! Line-oriented front end.
//!
//! Stands in for a windowed UI: every line on stdin is one user gesture, dialogs are
//! answered on the next line, and the main loop ticks the workbench between lines.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use lonescode::app::{Dialogs, Workbench};
use lonescode::core::{Command, Key};
use lonescode::kernel::services::adapters::{parse_keybinding, SharedRopeSurface};
use lonescode::kernel::{Action, NamePrompt, Notice, NoticeLevel, RowKind};

const TICK: Duration = Duration::from_millis(50);
const EXIT_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub root: PathBuf,
    pub open_file: Option<PathBuf>,
}

/// Resolves the optional command-line path against `cwd`. A directory becomes the
/// root; a file is opened, rooted at `cwd` when it lives there, else at its parent.
pub fn resolve_startup_paths(cwd: &Path, arg: Option<&str>) -> io::Result<Startup> {
    let Some(arg) = arg else {
        return Ok(Startup {
            root: cwd.to_path_buf(),
            open_file: None,
        });
    };

    let raw = Path::new(arg);
    let path = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };

    let metadata = std::fs::metadata(&path)?;
    if metadata.is_dir() {
        return Ok(Startup {
            root: path,
            open_file: None,
        });
    }

    let root = if path.starts_with(cwd) {
        cwd.to_path_buf()
    } else {
        path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf())
    };
    Ok(Startup {
        root,
        open_file: Some(path),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Folder(Option<String>),
    Tree,
    Toggle(String),
    Refresh(String),
    Open(String),
    Tabs,
    Switch(String),
    Close(Option<String>),
    Type(String),
    Set(String),
    Show,
    Status,
    Rename(String),
    Delete(String),
    CopyPath(Option<String>),
    Key(Key),
    Run(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidKey(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Empty => write!(f, "empty command"),
            ShellError::Unknown(word) => write!(f, "unknown command: {word} (try `help`)"),
            ShellError::MissingArgument(what) => write!(f, "missing argument: {what}"),
            ShellError::InvalidKey(key) => write!(f, "invalid key: {key}"),
        }
    }
}

impl std::error::Error for ShellError {}

pub fn parse_line(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |what| {
        if rest.is_empty() {
            Err(ShellError::MissingArgument(what))
        } else {
            Ok(rest.to_string())
        }
    };
    let optional = || (!rest.is_empty()).then(|| rest.to_string());

    let cmd = match word {
        "" => return Err(ShellError::Empty),
        "help" | "?" => ShellCommand::Help,
        "folder" => ShellCommand::Folder(optional()),
        "tree" | "ls" => ShellCommand::Tree,
        "toggle" => ShellCommand::Toggle(arg("directory")?),
        "refresh" => ShellCommand::Refresh(arg("directory")?),
        "open" => ShellCommand::Open(arg("file")?),
        "tabs" => ShellCommand::Tabs,
        "switch" => ShellCommand::Switch(arg("file")?),
        "close" => ShellCommand::Close(optional()),
        // Text arguments keep their inner spacing; `\n` starts a new line.
        "type" => ShellCommand::Type(unescape(arg("text")?)),
        "set" => ShellCommand::Set(unescape(rest.to_string())),
        "show" | "cat" => ShellCommand::Show,
        "status" => ShellCommand::Status,
        "rename" => ShellCommand::Rename(arg("path")?),
        "delete" | "rm" => ShellCommand::Delete(arg("path")?),
        "copypath" => ShellCommand::CopyPath(optional()),
        "key" => {
            let raw = arg("key")?;
            let key = parse_keybinding(&raw).ok_or(ShellError::InvalidKey(raw))?;
            ShellCommand::Key(key)
        }
        "save" => ShellCommand::Run(Command::Save),
        "new" => ShellCommand::Run(Command::NewFile),
        "mkdir" => ShellCommand::Run(Command::NewFolder),
        "find" => ShellCommand::Run(Command::Find),
        "replace" => ShellCommand::Run(Command::Replace),
        "goto" => ShellCommand::Run(Command::GotoLine),
        "comment" => ShellCommand::Run(Command::ToggleComment),
        "quit" | "exit" | "q" => ShellCommand::Run(Command::Quit),
        other => return Err(ShellError::Unknown(other.to_string())),
    };
    Ok(cmd)
}

fn unescape(text: String) -> String {
    text.replace("\\n", "\n").replace("\\t", "\t")
}

pub enum Input {
    Line(String),
    Idle,
    Closed,
}

/// Answers dialogs from stdin lines fed by a reader thread.
pub struct CliDialogs {
    lines: Receiver<String>,
    closed: bool,
}

impl CliDialogs {
    pub fn new(lines: Receiver<String>) -> Self {
        Self {
            lines,
            closed: false,
        }
    }

    pub fn next_input(&mut self, timeout: Duration) -> Input {
        if self.closed {
            return Input::Closed;
        }
        match self.lines.recv_timeout(timeout) {
            Ok(line) => Input::Line(line),
            Err(RecvTimeoutError::Timeout) => Input::Idle,
            Err(RecvTimeoutError::Disconnected) => {
                self.closed = true;
                Input::Closed
            }
        }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{question}");
        let _ = io::stdout().flush();
        if self.closed {
            return None;
        }
        match self.lines.recv() {
            Ok(line) => Some(line.trim().to_string()),
            Err(_) => {
                self.closed = true;
                None
            }
        }
    }
}

impl Dialogs for CliDialogs {
    fn choose_directory(&mut self) -> Option<PathBuf> {
        let answer = self.ask("folder path: ")?;
        if answer.is_empty() {
            return None;
        }
        let path = PathBuf::from(answer);
        if path.is_absolute() {
            return Some(path);
        }
        Some(std::env::current_dir().map(|cwd| cwd.join(&path)).unwrap_or(path))
    }

    fn confirm(&mut self, message: &str) -> bool {
        let answer = self.ask(&format!("{message} [y/N] ")).unwrap_or_default();
        matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn prompt_name(&mut self, prompt: &NamePrompt, initial: &str) -> Option<String> {
        let label = match prompt {
            NamePrompt::NewFile => "new file name",
            NamePrompt::NewFolder => "new folder name",
            NamePrompt::Rename { .. } => "new name",
        };
        let question = if initial.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{initial}]: ")
        };
        let answer = self.ask(&question)?;
        (!answer.is_empty()).then_some(answer)
    }

    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => println!("[info] {}", notice.message),
            NoticeLevel::Error => println!("[error] {}", notice.message),
        }
    }
}

pub fn run(workbench: &mut Workbench<CliDialogs>, surface: &SharedRopeSurface) {
    print_help();
    loop {
        workbench.tick();
        if workbench.should_quit() {
            break;
        }
        let line = match workbench.dialogs_mut().next_input(TICK) {
            Input::Line(line) => line,
            Input::Idle => continue,
            Input::Closed => break,
        };
        match parse_line(&line) {
            Ok(cmd) => execute(workbench, surface, cmd),
            Err(ShellError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }

    // Let pending writes land before the process exits.
    workbench.tick();
    if !workbench.wait_for_host(EXIT_FLUSH_TIMEOUT) {
        tracing::warn!(
            pending = workbench.pending_host_requests(),
            "exiting with host requests in flight"
        );
    }
    let dirty: Vec<_> = workbench
        .state()
        .session
        .documents()
        .iter()
        .filter(|doc| doc.is_dirty())
        .map(|doc| doc.file_name())
        .collect();
    if !dirty.is_empty() {
        println!("unsaved: {}", dirty.join(", "));
    }
}

fn resolve(workbench: &Workbench<CliDialogs>, raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return path;
    }
    match workbench.state().session.root() {
        Some(root) => root.join(path),
        None => std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path),
    }
}

fn execute(workbench: &mut Workbench<CliDialogs>, surface: &SharedRopeSurface, cmd: ShellCommand) {
    match cmd {
        ShellCommand::Help => print_help(),
        ShellCommand::Folder(Some(raw)) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::FolderChosen { path: Some(path) });
        }
        ShellCommand::Folder(None) => {
            workbench.run_command(Command::OpenFolder);
        }
        ShellCommand::Tree => print_tree(workbench),
        ShellCommand::Toggle(raw) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::ExplorerToggle { path });
        }
        ShellCommand::Refresh(raw) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::ExplorerRefresh { path });
        }
        ShellCommand::Open(raw) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::OpenDocument { path });
        }
        ShellCommand::Tabs => print_tabs(workbench),
        ShellCommand::Switch(raw) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::Activate { path });
        }
        ShellCommand::Close(Some(raw)) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::CloseDocument { path });
        }
        ShellCommand::Close(None) => {
            workbench.run_command(Command::CloseTab);
        }
        ShellCommand::Type(text) => {
            if workbench.state().session.active_path().is_none() {
                println!("no open document");
                return;
            }
            surface.with(|s| s.append(&text));
        }
        ShellCommand::Set(text) => {
            if workbench.state().session.active_path().is_none() {
                println!("no open document");
                return;
            }
            surface.with(|s| s.replace_all(&text));
        }
        ShellCommand::Show => println!("{}", workbench.surface().text()),
        ShellCommand::Status => print_status(workbench),
        ShellCommand::Rename(raw) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::RequestRename { path });
        }
        ShellCommand::Delete(raw) => {
            let path = resolve(workbench, &raw);
            let is_dir = workbench
                .state()
                .explorer
                .node(&path)
                .is_some_and(|node| node.is_dir);
            workbench.dispatch(Action::RequestDelete { path, is_dir });
        }
        ShellCommand::CopyPath(Some(raw)) => {
            let path = resolve(workbench, &raw);
            workbench.dispatch(Action::CopyPath { path });
        }
        ShellCommand::CopyPath(None) => {
            workbench.run_command(Command::CopyPath);
        }
        ShellCommand::Key(key) => {
            if !workbench.handle_key(key) {
                println!("key is not bound");
            }
        }
        ShellCommand::Run(command) => {
            workbench.run_command(command);
        }
    }
}

fn print_tree(workbench: &Workbench<CliDialogs>) {
    let rows = workbench.state().explorer.rows();
    if rows.is_empty() {
        println!("no folder open");
        return;
    }
    for row in rows {
        let indent = "  ".repeat(row.depth);
        match row.kind {
            RowKind::Entry { is_dir: true, expanded } => {
                let marker = if expanded { "v" } else { ">" };
                println!("{indent}{marker} {}/", row.name);
            }
            RowKind::Entry { is_dir: false, .. } => println!("{indent}  {}", row.name),
            RowKind::Loading => println!("{indent}  (loading...)"),
            RowKind::Error(message) => println!("{indent}  (error: {message})"),
        }
    }
}

fn print_tabs(workbench: &Workbench<CliDialogs>) {
    let session = &workbench.state().session;
    if session.documents().is_empty() {
        println!("no open documents");
        return;
    }
    for doc in session.documents() {
        let marker = if session.active_path() == Some(doc.path()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {}  {}", doc.tab_label(), doc.path().display());
    }
}

fn print_status(workbench: &Workbench<CliDialogs>) {
    let state = workbench.state();
    let root = state
        .session
        .root()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("folder: {root}");
    match state.session.active_document() {
        Some(doc) => println!(
            "file: {} ({}){}",
            doc.path().display(),
            state.status_language().unwrap_or("Plain Text"),
            if doc.is_dirty() { " modified" } else { "" }
        ),
        None => println!("file: -"),
    }
    if let Some(slot) = state.session.pending_auto_save() {
        println!("auto-save pending: {}", slot.path.display());
    }
    let pending = workbench.pending_host_requests();
    if pending > 0 {
        println!("host requests in flight: {pending}");
    }
}

fn print_help() {
    println!(
        "\
commands:
  folder [path]      open a folder (asks when no path)
  tree | toggle <dir> | refresh <dir>
  open <file> | tabs | switch <file> | close [file]
  type <text> | set <text> | show     edit the active document (\\n for newline)
  save | new | mkdir | rename <path> | delete <path> | copypath [path]
  find | replace | goto | comment
  key <chord>        e.g. key ctrl+s
  status | help | quit"
    );
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
