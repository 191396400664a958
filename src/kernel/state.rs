use std::path::PathBuf;

use super::explorer::Explorer;
use super::services::ports::SessionConfig;
use super::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    CloseDocument { path: PathBuf },
    DeletePath { path: PathBuf, is_dir: bool },
}

impl PendingAction {
    pub fn path(&self) -> &std::path::Path {
        match self {
            PendingAction::CloseDocument { path } | PendingAction::DeletePath { path, .. } => path,
        }
    }
}

/// A yes/no question waiting for `ConfirmAccept` or `ConfirmCancel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub message: String,
    pub on_confirm: PendingAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePrompt {
    NewFile,
    NewFolder,
    Rename { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub struct AppState {
    pub session: Session,
    pub explorer: Explorer,
    pub confirm: Option<ConfirmState>,
    pub config: SessionConfig,
}

impl AppState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Session::new(config.auto_save, config.auto_save_delay),
            explorer: Explorer::new(),
            confirm: None,
            config,
        }
    }

    /// Status-bar language label of the active document.
    pub fn status_language(&self) -> Option<&'static str> {
        self.session
            .active_document()
            .map(|doc| doc.mode().display_name())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
