use std::path::Path;

use crate::core::Command;
use crate::kernel::services::ports::{EditorSurface, HostError, HostReply, SurfaceAction};

use super::{Action, AppState, Effect, NamePrompt, Notice};

mod session;
mod workspace;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }

    fn merge(mut self, other: DispatchResult) -> Self {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
        self
    }
}

/// Owns the application state and the single editing surface. Every transition goes
/// through `dispatch`; IO comes back out as `Effect`s.
pub struct Store {
    state: AppState,
    surface: Box<dyn EditorSurface>,
}

impl Store {
    pub fn new(state: AppState, surface: Box<dyn EditorSurface>) -> Self {
        Self { state, surface }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &dyn EditorSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn EditorSurface {
        self.surface.as_mut()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::OpenDocument { path } => self.open_document(path),
            Action::Activate { path } => self.activate(&path),
            Action::Edit { content, now } => self.edit(content, now),
            Action::Save { path } => self.save(&path),
            Action::CloseDocument { path } => self.close_document(path),
            Action::ConfirmAccept => self.confirm_accept(),
            Action::ConfirmCancel => DispatchResult::changed(self.state.confirm.take().is_some()),
            Action::Tick { now } => self.tick(now),
            Action::FolderChosen { path } => self.folder_chosen(path),
            Action::NameEntered { prompt, name } => self.name_entered(prompt, &name),
            Action::RequestRename { path } => self.request_rename(path),
            Action::RequestDelete { path, is_dir } => self.request_delete(path, is_dir),
            Action::CreateFile { path } => self.create_file(path),
            Action::CreateFolder { path } => self.create_folder(path),
            Action::RenamePath { from, to } => self.rename_path(from, to),
            Action::DeletePath { path, is_dir } => self.delete_path(path, is_dir),
            Action::ExplorerToggle { path } => self.explorer_toggle(&path),
            Action::ExplorerRefresh { path } => self.explorer_refresh(&path),
            Action::CopyPath { path } => Self::copy_path(&path),
            Action::Host(reply) => self.dispatch_host_reply(reply),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::Save => match self.state.session.active_path() {
                Some(path) => {
                    let path = path.to_path_buf();
                    self.save(&path)
                }
                None => DispatchResult::none(),
            },
            Command::CloseTab => match self.state.session.active_path() {
                Some(path) => {
                    let path = path.to_path_buf();
                    self.close_document(path)
                }
                None => DispatchResult::none(),
            },
            Command::OpenFolder => DispatchResult::effect(Effect::ChooseDirectory, false),
            Command::NewFile => self.prompt_in_root(NamePrompt::NewFile),
            Command::NewFolder => self.prompt_in_root(NamePrompt::NewFolder),
            Command::CopyPath => match self.state.session.active_path() {
                Some(path) => Self::copy_path(path),
                None => DispatchResult::none(),
            },
            Command::Find => self.surface_action(SurfaceAction::Find),
            Command::Replace => self.surface_action(SurfaceAction::Replace),
            Command::GotoLine => self.surface_action(SurfaceAction::GotoLine),
            Command::ToggleComment => self.surface_action(SurfaceAction::ToggleComment),
            Command::Quit => DispatchResult::none(),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                DispatchResult::none()
            }
        }
    }

    fn copy_path(path: &Path) -> DispatchResult {
        let text = path.to_string_lossy().to_string();
        DispatchResult::effect(Effect::CopyToClipboard { text }, false)
    }

    fn surface_action(&mut self, action: SurfaceAction) -> DispatchResult {
        self.surface.run_action(action);
        DispatchResult::none()
    }

    fn no_folder_notice(&self) -> DispatchResult {
        DispatchResult::effect(Effect::Notify(Notice::error("Open a folder first")), false)
    }

    fn prompt_in_root(&mut self, prompt: NamePrompt) -> DispatchResult {
        if self.state.session.root().is_none() {
            return self.no_folder_notice();
        }
        DispatchResult::effect(
            Effect::PromptName {
                prompt,
                initial: String::new(),
            },
            false,
        )
    }

    fn dispatch_host_reply(&mut self, reply: HostReply) -> DispatchResult {
        match reply {
            HostReply::FileRead { path, content } => self.file_read(path, content),
            HostReply::ReadFailed { error } => self.read_failed(error),
            HostReply::FileWritten {
                path,
                version,
                origin,
            } => self.file_written(&path, version, origin),
            HostReply::WriteFailed { error, origin } => self.write_failed(error, origin),
            HostReply::DirListed { path, entries } => self.dir_listed(&path, entries),
            HostReply::ListFailed { error } => self.list_failed(error),
            HostReply::PathCreated { path, is_dir } => self.path_created(path, is_dir),
            HostReply::PathDeleted { path, is_dir } => self.path_deleted(&path, is_dir),
            HostReply::PathRenamed { from, to } => self.path_renamed(&from, to),
            HostReply::CreateFailed { error } => {
                self.host_failed(format!("Could not create: {error}"), &error)
            }
            HostReply::DeleteFailed { error } => {
                self.host_failed(format!("Could not delete: {error}"), &error)
            }
            HostReply::RenameFailed { error } => {
                self.host_failed(format!("Could not rename: {error}"), &error)
            }
        }
    }

    fn host_failed(&mut self, message: String, error: &HostError) -> DispatchResult {
        tracing::warn!(kind = ?error.kind, path = %error.path.display(), "host operation failed");
        DispatchResult::effect(Effect::Notify(Notice::error(message)), false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
