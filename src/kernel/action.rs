use std::path::PathBuf;
use std::time::Instant;

use crate::core::Command;
use crate::kernel::services::ports::HostReply;
use crate::kernel::state::NamePrompt;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    FolderChosen {
        path: Option<PathBuf>,
    },
    OpenDocument {
        path: PathBuf,
    },
    Activate {
        path: PathBuf,
    },
    Edit {
        content: String,
        now: Instant,
    },
    Save {
        path: PathBuf,
    },
    CloseDocument {
        path: PathBuf,
    },
    ConfirmAccept,
    ConfirmCancel,
    NameEntered {
        prompt: NamePrompt,
        name: String,
    },
    RequestRename {
        path: PathBuf,
    },
    RequestDelete {
        path: PathBuf,
        is_dir: bool,
    },
    CreateFile {
        path: PathBuf,
    },
    CreateFolder {
        path: PathBuf,
    },
    RenamePath {
        from: PathBuf,
        to: PathBuf,
    },
    DeletePath {
        path: PathBuf,
        is_dir: bool,
    },
    ExplorerToggle {
        path: PathBuf,
    },
    ExplorerRefresh {
        path: PathBuf,
    },
    CopyPath {
        path: PathBuf,
    },
    Tick {
        now: Instant,
    },
    Host(HostReply),
}
