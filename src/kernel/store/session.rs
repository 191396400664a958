use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::kernel::services::ports::{HostError, HostRequest, SaveOrigin};
use crate::kernel::session::Document;
use crate::kernel::state::{ConfirmState, PendingAction};
use crate::kernel::{Effect, Notice};

use super::DispatchResult;

impl super::Store {
    pub(super) fn open_document(&mut self, path: PathBuf) -> DispatchResult {
        if self.state.session.is_open(&path) {
            return self.activate(&path);
        }
        if !self.state.session.begin_loading(path.clone()) {
            return DispatchResult::none();
        }
        DispatchResult::effect(Effect::Host(HostRequest::ReadFile { path }), false)
    }

    pub(super) fn file_read(&mut self, path: PathBuf, content: String) -> DispatchResult {
        self.state.session.finish_loading(&path);
        if self.state.session.is_open(&path) {
            return self.activate(&path);
        }
        self.state.session.insert(Document::new(path.clone(), content));
        self.switch_to(path);
        DispatchResult::changed(true)
    }

    pub(super) fn read_failed(&mut self, error: HostError) -> DispatchResult {
        self.state.session.finish_loading(&error.path);
        tracing::warn!(path = %error.path.display(), reason = %error.reason, "open failed");
        DispatchResult::effect(
            Effect::Notify(Notice::error(format!("Could not open file: {error}"))),
            false,
        )
    }

    pub(super) fn activate(&mut self, path: &Path) -> DispatchResult {
        if !self.state.session.is_open(path) {
            return DispatchResult::none();
        }
        if self.state.session.active_path() == Some(path) {
            return DispatchResult::none();
        }
        self.switch_to(path.to_path_buf());
        DispatchResult::changed(true)
    }

    /// Flushes the outgoing document from the surface, then binds the surface to
    /// `path`. The load goes through `apply_external_content` and is never seen as
    /// an edit.
    fn switch_to(&mut self, path: PathBuf) {
        if self.state.session.active_path().is_some() {
            let text = self.surface.text();
            self.state.session.capture_active(text);
        }
        self.state.session.set_active(Some(path.clone()));
        if let Some(doc) = self.state.session.document(&path) {
            self.surface.apply_external_content(doc.buffer(), doc.mode());
        }
    }

    fn flush_if_active(&mut self, path: &Path) {
        if self.state.session.active_path() == Some(path) {
            let text = self.surface.text();
            self.state.session.capture_active(text);
        }
    }

    pub(super) fn edit(&mut self, content: String, now: Instant) -> DispatchResult {
        DispatchResult::changed(self.state.session.edit_active(content, now).is_some())
    }

    pub(super) fn save(&mut self, path: &Path) -> DispatchResult {
        self.write_request(path, SaveOrigin::Explicit)
            .map(|request| DispatchResult::effect(Effect::Host(request), false))
            .unwrap_or_else(DispatchResult::none)
    }

    fn write_request(&mut self, path: &Path, origin: SaveOrigin) -> Option<HostRequest> {
        if !self.state.session.is_open(path) {
            return None;
        }
        self.flush_if_active(path);
        let doc = self.state.session.document(path)?;
        Some(HostRequest::WriteFile {
            path: path.to_path_buf(),
            content: doc.buffer().to_string(),
            version: doc.version(),
            origin,
        })
    }

    pub(super) fn tick(&mut self, now: Instant) -> DispatchResult {
        let Some(slot) = self.state.session.take_due_auto_save(now) else {
            return DispatchResult::none();
        };
        let still_dirty = self
            .state
            .session
            .document(&slot.path)
            .is_some_and(|doc| doc.is_dirty());
        if !still_dirty {
            tracing::debug!(path = %slot.path.display(), "auto-save skipped: nothing to write");
            return DispatchResult::none();
        }
        match self.write_request(&slot.path, SaveOrigin::AutoSave) {
            Some(request) => DispatchResult::effect(Effect::Host(request), false),
            None => DispatchResult::none(),
        }
    }

    pub(super) fn file_written(
        &mut self,
        path: &Path,
        version: u64,
        origin: SaveOrigin,
    ) -> DispatchResult {
        if !self.state.session.is_open(path) {
            tracing::debug!(path = %path.display(), "write completed for a closed document");
            return DispatchResult::none();
        }
        let cleaned = self.state.session.mark_saved(path, version);
        if cleaned {
            self.state.session.cancel_auto_save_for(path);
        }
        if origin == SaveOrigin::AutoSave {
            tracing::debug!(path = %path.display(), "auto-saved");
            return DispatchResult::changed(cleaned);
        }
        DispatchResult::effect(Effect::Notify(Notice::info("Saved")), cleaned)
    }

    pub(super) fn write_failed(&mut self, error: HostError, origin: SaveOrigin) -> DispatchResult {
        match origin {
            SaveOrigin::AutoSave => {
                tracing::warn!(path = %error.path.display(), error = %error, "auto-save failed");
                DispatchResult::none()
            }
            SaveOrigin::Explicit => {
                tracing::error!(path = %error.path.display(), error = %error, "save failed");
                DispatchResult::effect(
                    Effect::Notify(Notice::error(format!("Could not save file: {error}"))),
                    false,
                )
            }
        }
    }

    pub(super) fn close_document(&mut self, path: PathBuf) -> DispatchResult {
        let Some(doc) = self.state.session.document(&path) else {
            return DispatchResult::none();
        };
        if doc.is_dirty() {
            let message = format!("{} has unsaved changes. Close without saving?", doc.file_name());
            self.state.confirm = Some(ConfirmState {
                message: message.clone(),
                on_confirm: PendingAction::CloseDocument { path },
            });
            return DispatchResult::effect(Effect::Confirm { message }, true);
        }
        DispatchResult::changed(self.close_now(&path))
    }

    /// Removes the document without asking. When it was active the last tab in order
    /// takes over, or the surface is cleared.
    pub(super) fn close_now(&mut self, path: &Path) -> bool {
        let was_active = self.state.session.active_path() == Some(path);
        if self.state.session.remove(path).is_none() {
            return false;
        }
        if !was_active {
            return true;
        }
        self.state.session.set_active(None);
        let next = self
            .state
            .session
            .documents()
            .last()
            .map(|doc| doc.path().to_path_buf());
        match next {
            Some(next) => self.switch_to(next),
            None => self.surface.clear(),
        }
        true
    }

    pub(super) fn confirm_accept(&mut self) -> DispatchResult {
        let Some(confirm) = self.state.confirm.take() else {
            return DispatchResult::none();
        };
        match confirm.on_confirm {
            PendingAction::CloseDocument { path } => {
                self.close_now(&path);
                DispatchResult::changed(true)
            }
            PendingAction::DeletePath { path, is_dir } => DispatchResult::effect(
                Effect::Host(HostRequest::DeletePath { path, is_dir }),
                true,
            ),
        }
    }
}
