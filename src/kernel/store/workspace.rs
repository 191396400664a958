use std::path::{Component, Path, PathBuf};

use crate::kernel::services::ports::{DirEntry, HostError, HostRequest};
use crate::kernel::state::{ConfirmState, NamePrompt, PendingAction};
use crate::kernel::{Effect, Notice};

use super::DispatchResult;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.name.starts_with('.')
}

/// A single path component, so the result stays next to its siblings.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

impl super::Store {
    pub(super) fn folder_chosen(&mut self, path: Option<PathBuf>) -> DispatchResult {
        let Some(root) = path else {
            return DispatchResult::none();
        };
        tracing::info!(root = %root.display(), "folder opened");
        self.state.session.set_root(root.clone());
        self.state.explorer.set_root(root.clone());
        DispatchResult::effect(Effect::Host(HostRequest::ListDirectory { path: root }), true)
    }

    pub(super) fn explorer_toggle(&mut self, path: &Path) -> DispatchResult {
        match self.state.explorer.toggle(path) {
            Some(path) => {
                DispatchResult::effect(Effect::Host(HostRequest::ListDirectory { path }), true)
            }
            None => DispatchResult::changed(self.state.explorer.node(path).is_some()),
        }
    }

    pub(super) fn explorer_refresh(&mut self, path: &Path) -> DispatchResult {
        match self.refresh_listing(path) {
            Some(effect) => DispatchResult::effect(effect, true),
            None => DispatchResult::none(),
        }
    }

    fn refresh_listing(&mut self, dir: &Path) -> Option<Effect> {
        let path = self.state.explorer.refresh(dir)?;
        Some(Effect::Host(HostRequest::ListDirectory { path }))
    }

    fn refresh_parent(&mut self, path: &Path) -> DispatchResult {
        let Some(parent) = path.parent() else {
            return DispatchResult::none();
        };
        self.explorer_refresh(parent)
    }

    pub(super) fn dir_listed(&mut self, path: &Path, mut entries: Vec<DirEntry>) -> DispatchResult {
        if !self.state.config.show_hidden {
            entries.retain(|entry| !is_hidden(entry));
        }
        let applied = self.state.explorer.apply_listing(path, entries);
        if !applied {
            tracing::debug!(path = %path.display(), "listing for a node no longer in the tree");
        }
        DispatchResult::changed(applied)
    }

    pub(super) fn list_failed(&mut self, error: HostError) -> DispatchResult {
        tracing::warn!(path = %error.path.display(), error = %error, "list failed");
        let message = error.to_string();
        DispatchResult::changed(self.state.explorer.apply_list_error(&error.path, message))
    }

    pub(super) fn name_entered(&mut self, prompt: NamePrompt, name: &str) -> DispatchResult {
        let name = name.trim();
        if name.is_empty() {
            return DispatchResult::effect(
                Effect::Notify(Notice::error("Name cannot be empty")),
                false,
            );
        }
        if !is_plain_name(name) {
            return DispatchResult::effect(
                Effect::Notify(Notice::error(format!("Invalid name: {name}"))),
                false,
            );
        }
        match prompt {
            NamePrompt::NewFile => match self.state.session.root() {
                Some(root) => {
                    let path = root.join(name);
                    self.create_file(path)
                }
                None => self.no_folder_notice(),
            },
            NamePrompt::NewFolder => match self.state.session.root() {
                Some(root) => {
                    let path = root.join(name);
                    self.create_folder(path)
                }
                None => self.no_folder_notice(),
            },
            NamePrompt::Rename { path } => {
                if path.file_name().is_some_and(|current| current == name) {
                    return DispatchResult::none();
                }
                let to = path.with_file_name(name);
                self.rename_path(path, to)
            }
        }
    }

    pub(super) fn request_rename(&mut self, path: PathBuf) -> DispatchResult {
        let initial = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        DispatchResult::effect(
            Effect::PromptName {
                prompt: NamePrompt::Rename { path },
                initial,
            },
            false,
        )
    }

    pub(super) fn request_delete(&mut self, path: PathBuf, is_dir: bool) -> DispatchResult {
        let message = if is_dir {
            "Delete folder?"
        } else {
            "Delete file?"
        }
        .to_string();
        self.state.confirm = Some(ConfirmState {
            message: message.clone(),
            on_confirm: PendingAction::DeletePath { path, is_dir },
        });
        DispatchResult::effect(Effect::Confirm { message }, true)
    }

    pub(super) fn create_file(&mut self, path: PathBuf) -> DispatchResult {
        DispatchResult::effect(Effect::Host(HostRequest::CreateFile { path }), false)
    }

    pub(super) fn create_folder(&mut self, path: PathBuf) -> DispatchResult {
        DispatchResult::effect(Effect::Host(HostRequest::CreateDirectory { path }), false)
    }

    pub(super) fn rename_path(&mut self, from: PathBuf, to: PathBuf) -> DispatchResult {
        if from == to {
            return DispatchResult::none();
        }
        DispatchResult::effect(Effect::Host(HostRequest::RenamePath { from, to }), false)
    }

    pub(super) fn delete_path(&mut self, path: PathBuf, is_dir: bool) -> DispatchResult {
        DispatchResult::effect(Effect::Host(HostRequest::DeletePath { path, is_dir }), false)
    }

    pub(super) fn path_created(&mut self, path: PathBuf, is_dir: bool) -> DispatchResult {
        tracing::info!(path = %path.display(), is_dir, "created");
        let refreshed = self.refresh_parent(&path);
        if is_dir {
            return refreshed;
        }
        refreshed.merge(self.open_document(path))
    }

    pub(super) fn path_deleted(&mut self, path: &Path, is_dir: bool) -> DispatchResult {
        tracing::info!(path = %path.display(), is_dir, "deleted");
        let mut changed = false;
        if !is_dir && self.state.session.is_open(path) {
            changed |= self.close_now(path);
        }
        let stale_confirm = self
            .state
            .confirm
            .as_ref()
            .is_some_and(|confirm| confirm.on_confirm.path() == path);
        if stale_confirm {
            self.state.confirm = None;
            changed = true;
        }
        DispatchResult::changed(changed).merge(self.refresh_parent(path))
    }

    pub(super) fn path_renamed(&mut self, from: &Path, to: PathBuf) -> DispatchResult {
        tracing::info!(from = %from.display(), to = %to.display(), "renamed");
        let mut changed = false;
        if self.state.session.is_open(from) {
            // The rename overwrote whatever was at `to`.
            if self.state.session.is_open(&to) {
                self.close_now(&to);
            }
            changed = self.state.session.rekey(from, to.clone());
        }
        DispatchResult::changed(changed)
            .merge(self.refresh_parent(from))
            .merge(self.refresh_parent(&to))
    }
}
