//! `HostService` over the local filesystem.
//!
//! Blocking `std::fs` calls; the runtime moves them off the display thread.

use crate::kernel::services::ports::{
    DirEntry, HostError, HostErrorKind, HostReply, HostRequest, HostService,
};
use std::fs;
use std::io;
use std::path::Path;

pub struct LocalHost;

impl LocalHost {
    pub fn new() -> Self {
        Self
    }

    pub fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            // Follow symlinks so a linked directory can be expanded.
            let is_dir = match fs::metadata(&path) {
                Ok(metadata) => metadata.is_dir(),
                Err(_) => entry.file_type()?.is_dir(),
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path,
                is_dir,
            });
        }
        Ok(entries)
    }

    pub fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    pub fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    /// Creates missing parents, then an empty file. An existing file is left alone
    /// and reported as `AlreadyExists`.
    pub fn create_file(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        Ok(())
    }

    pub fn create_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    /// Removes a file, or a directory with everything under it. The kind is read from
    /// disk (without following a symlink) and returned; `true` means a directory.
    pub fn delete_path(&self, path: &Path) -> io::Result<bool> {
        let is_dir = fs::symlink_metadata(path)?.is_dir();
        if is_dir {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(is_dir)
    }

    pub fn rename_path(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

impl Default for LocalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostService for LocalHost {
    fn execute(&self, request: HostRequest) -> HostReply {
        match request {
            HostRequest::ListDirectory { path } => match self.list_directory(&path) {
                Ok(entries) => HostReply::DirListed { path, entries },
                Err(e) => HostReply::ListFailed {
                    error: HostError::from_io(HostErrorKind::List, &path, &e),
                },
            },
            HostRequest::ReadFile { path } => match self.read_file(&path) {
                Ok(content) => HostReply::FileRead { path, content },
                Err(e) => HostReply::ReadFailed {
                    error: HostError::from_io(HostErrorKind::Read, &path, &e),
                },
            },
            HostRequest::WriteFile {
                path,
                content,
                version,
                origin,
            } => match self.write_file(&path, &content) {
                Ok(()) => HostReply::FileWritten {
                    path,
                    version,
                    origin,
                },
                Err(e) => HostReply::WriteFailed {
                    error: HostError::from_io(HostErrorKind::Write, &path, &e),
                    origin,
                },
            },
            HostRequest::CreateFile { path } => match self.create_file(&path) {
                Ok(()) => HostReply::PathCreated {
                    path,
                    is_dir: false,
                },
                Err(e) => HostReply::CreateFailed {
                    error: HostError::from_io(HostErrorKind::Create, &path, &e),
                },
            },
            HostRequest::CreateDirectory { path } => match self.create_directory(&path) {
                Ok(()) => HostReply::PathCreated { path, is_dir: true },
                Err(e) => HostReply::CreateFailed {
                    error: HostError::from_io(HostErrorKind::Create, &path, &e),
                },
            },
            HostRequest::DeletePath { path, is_dir } => match self.delete_path(&path) {
                Ok(actual) => {
                    if actual != is_dir {
                        tracing::debug!(
                            path = %path.display(),
                            is_dir = actual,
                            "delete kind differs from request"
                        );
                    }
                    HostReply::PathDeleted {
                        path,
                        is_dir: actual,
                    }
                }
                Err(e) => HostReply::DeleteFailed {
                    error: HostError::from_io(HostErrorKind::Delete, &path, &e),
                },
            },
            HostRequest::RenamePath { from, to } => match self.rename_path(&from, &to) {
                Ok(()) => HostReply::PathRenamed { from, to },
                Err(e) => HostReply::RenameFailed {
                    error: HostError::from_io(HostErrorKind::Rename, &from, &e),
                },
            },
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
