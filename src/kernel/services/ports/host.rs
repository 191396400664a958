//! Host boundary contract.
//!
//! The display side never touches the filesystem. It describes what it wants as a
//! `HostRequest` and learns the outcome from a `HostReply`. Every request has exactly
//! one reply.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path, is_dir }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostErrorKind {
    Read,
    Write,
    Create,
    Delete,
    Rename,
    List,
}

impl HostErrorKind {
    pub fn verb(self) -> &'static str {
        match self {
            HostErrorKind::Read => "read",
            HostErrorKind::Write => "write",
            HostErrorKind::Create => "create",
            HostErrorKind::Delete => "delete",
            HostErrorKind::Rename => "rename",
            HostErrorKind::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    NotText,
    Other,
}

impl From<io::ErrorKind> for FailureReason {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FailureReason::NotFound,
            io::ErrorKind::PermissionDenied => FailureReason::PermissionDenied,
            io::ErrorKind::AlreadyExists => FailureReason::AlreadyExists,
            io::ErrorKind::InvalidData => FailureReason::NotText,
            _ => FailureReason::Other,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureReason::NotFound => "not found",
            FailureReason::PermissionDenied => "permission denied",
            FailureReason::AlreadyExists => "already exists",
            FailureReason::NotText => "not a text file",
            FailureReason::Other => "io error",
        };
        f.write_str(text)
    }
}

/// A failed host operation. The session treats every kind the same way: nothing
/// changes locally and the user is told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub kind: HostErrorKind,
    pub path: PathBuf,
    pub reason: FailureReason,
    pub detail: String,
}

impl HostError {
    pub fn new(
        kind: HostErrorKind,
        path: &Path,
        reason: FailureReason,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            reason,
            detail: detail.into(),
        }
    }

    pub fn from_io(kind: HostErrorKind, path: &Path, err: &io::Error) -> Self {
        Self::new(kind, path, err.kind().into(), err.to_string())
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed: {} ({}): {}",
            self.kind.verb(),
            self.path.display(),
            self.reason,
            self.detail
        )
    }
}

impl std::error::Error for HostError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrigin {
    Explicit,
    AutoSave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    ListDirectory {
        path: PathBuf,
    },
    ReadFile {
        path: PathBuf,
    },
    WriteFile {
        path: PathBuf,
        content: String,
        version: u64,
        origin: SaveOrigin,
    },
    CreateFile {
        path: PathBuf,
    },
    CreateDirectory {
        path: PathBuf,
    },
    /// `is_dir` is the display side's view. The host reads the real kind from disk and
    /// reports it in `PathDeleted`.
    DeletePath {
        path: PathBuf,
        is_dir: bool,
    },
    RenamePath {
        from: PathBuf,
        to: PathBuf,
    },
}

impl HostRequest {
    pub fn op_name(&self) -> &'static str {
        match self {
            HostRequest::ListDirectory { .. } => "list_directory",
            HostRequest::ReadFile { .. } => "read_file",
            HostRequest::WriteFile { .. } => "write_file",
            HostRequest::CreateFile { .. } => "create_file",
            HostRequest::CreateDirectory { .. } => "create_directory",
            HostRequest::DeletePath { .. } => "delete_path",
            HostRequest::RenamePath { .. } => "rename_path",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            HostRequest::ListDirectory { path }
            | HostRequest::ReadFile { path }
            | HostRequest::WriteFile { path, .. }
            | HostRequest::CreateFile { path }
            | HostRequest::CreateDirectory { path }
            | HostRequest::DeletePath { path, .. } => path,
            HostRequest::RenamePath { from, .. } => from,
        }
    }

    /// The failure reply for this request, used when the executor itself breaks
    /// before the operation could report.
    pub fn failed(&self, detail: impl Into<String>) -> HostReply {
        let detail = detail.into();
        let error = |kind| HostError::new(kind, self.path(), FailureReason::Other, detail.clone());
        match self {
            HostRequest::ListDirectory { .. } => HostReply::ListFailed {
                error: error(HostErrorKind::List),
            },
            HostRequest::ReadFile { .. } => HostReply::ReadFailed {
                error: error(HostErrorKind::Read),
            },
            HostRequest::WriteFile { origin, .. } => HostReply::WriteFailed {
                error: error(HostErrorKind::Write),
                origin: *origin,
            },
            HostRequest::CreateFile { .. } | HostRequest::CreateDirectory { .. } => {
                HostReply::CreateFailed {
                    error: error(HostErrorKind::Create),
                }
            }
            HostRequest::DeletePath { .. } => HostReply::DeleteFailed {
                error: error(HostErrorKind::Delete),
            },
            HostRequest::RenamePath { .. } => HostReply::RenameFailed {
                error: error(HostErrorKind::Rename),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostReply {
    DirListed {
        path: PathBuf,
        entries: Vec<DirEntry>,
    },
    ListFailed {
        error: HostError,
    },
    FileRead {
        path: PathBuf,
        content: String,
    },
    ReadFailed {
        error: HostError,
    },
    FileWritten {
        path: PathBuf,
        version: u64,
        origin: SaveOrigin,
    },
    WriteFailed {
        error: HostError,
        origin: SaveOrigin,
    },
    PathCreated {
        path: PathBuf,
        is_dir: bool,
    },
    CreateFailed {
        error: HostError,
    },
    PathDeleted {
        path: PathBuf,
        is_dir: bool,
    },
    DeleteFailed {
        error: HostError,
    },
    PathRenamed {
        from: PathBuf,
        to: PathBuf,
    },
    RenameFailed {
        error: HostError,
    },
}

impl HostReply {
    pub fn error(&self) -> Option<&HostError> {
        match self {
            HostReply::ListFailed { error }
            | HostReply::ReadFailed { error }
            | HostReply::WriteFailed { error, .. }
            | HostReply::CreateFailed { error }
            | HostReply::DeleteFailed { error }
            | HostReply::RenameFailed { error } => Some(error),
            _ => None,
        }
    }
}

/// Privileged side of the boundary: performs one request to completion.
pub trait HostService: Send + Sync {
    fn execute(&self, request: HostRequest) -> HostReply;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/host.rs"]
mod tests;
