//! Open documents, the active tab, and the auto-save slot.
//!
//! `Session` only tracks state. Talking to the host and to the editing surface is the
//! store's job; everything here is synchronous and side-effect free.

use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::kernel::language::SyntaxMode;
use crate::kernel::services::ports::config::DEFAULT_AUTO_SAVE_DELAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    buffer: String,
    dirty: bool,
    version: u64,
}

impl Document {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self {
            path,
            buffer: content,
            dirty: false,
            version: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Bumped on every edit. A save completion only cleans the document when it
    /// carries the version that is still current.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mode(&self) -> SyntaxMode {
        SyntaxMode::from_path(&self.path)
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn tab_label(&self) -> String {
        if self.dirty {
            format!("\u{25cf} {}", self.file_name())
        } else {
            self.file_name()
        }
    }

    fn edit(&mut self, content: String) {
        self.buffer = content;
        self.dirty = true;
        self.version = self.version.wrapping_add(1);
    }

    /// Flush from the surface. Keeps the dirty flag as is.
    fn capture(&mut self, content: String) {
        self.buffer = content;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSaveSlot {
    pub path: PathBuf,
    pub deadline: Instant,
}

#[derive(Debug)]
pub struct Session {
    documents: Vec<Document>,
    active: Option<PathBuf>,
    root: Option<PathBuf>,
    loading: FxHashSet<PathBuf>,
    auto_save: Option<AutoSaveSlot>,
    auto_save_enabled: bool,
    auto_save_delay: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(true, DEFAULT_AUTO_SAVE_DELAY)
    }
}

impl Session {
    pub fn new(auto_save_enabled: bool, auto_save_delay: Duration) -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            root: None,
            loading: FxHashSet::default(),
            auto_save: None,
            auto_save_enabled,
            auto_save_delay,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, path: &Path) -> Option<&Document> {
        self.documents.iter().find(|d| d.path == path)
    }

    fn document_mut(&mut self, path: &Path) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.path == path)
    }

    pub fn is_open(&self, path: &Path) -> bool {
        self.document(path).is_some()
    }

    pub fn tab_paths(&self) -> Vec<PathBuf> {
        self.documents.iter().map(|d| d.path.clone()).collect()
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.as_deref().and_then(|p| self.document(p))
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn set_root(&mut self, root: PathBuf) {
        self.root = Some(root);
    }

    pub fn auto_save_delay(&self) -> Duration {
        self.auto_save_delay
    }

    pub fn pending_auto_save(&self) -> Option<&AutoSaveSlot> {
        self.auto_save.as_ref()
    }

    pub fn has_pending_auto_save(&self, path: &Path) -> bool {
        self.auto_save.as_ref().is_some_and(|slot| slot.path == path)
    }

    pub fn is_loading(&self, path: &Path) -> bool {
        self.loading.contains(path)
    }

    /// Returns false when a read for `path` is already in flight.
    pub fn begin_loading(&mut self, path: PathBuf) -> bool {
        self.loading.insert(path)
    }

    pub fn finish_loading(&mut self, path: &Path) {
        self.loading.remove(path);
    }

    /// Appends at the end of tab order. Returns false if the path is already open.
    pub fn insert(&mut self, document: Document) -> bool {
        if self.is_open(&document.path) {
            return false;
        }
        self.documents.push(document);
        true
    }

    pub fn set_active(&mut self, path: Option<PathBuf>) {
        self.active = path;
    }

    pub fn capture_active(&mut self, content: String) {
        let Some(active) = self.active.clone() else {
            return;
        };
        if let Some(doc) = self.document_mut(&active) {
            doc.capture(content);
        }
    }

    /// Applies a user edit to the active document and re-arms the single auto-save
    /// slot. Returns the edited path.
    pub fn edit_active(&mut self, content: String, now: Instant) -> Option<PathBuf> {
        let active = self.active.clone()?;
        let doc = self.document_mut(&active)?;
        doc.edit(content);
        if self.auto_save_enabled {
            self.auto_save = Some(AutoSaveSlot {
                path: active.clone(),
                deadline: now + self.auto_save_delay,
            });
        }
        Some(active)
    }

    pub fn cancel_auto_save_for(&mut self, path: &Path) -> bool {
        if self.has_pending_auto_save(path) {
            self.auto_save = None;
            return true;
        }
        false
    }

    /// Takes the slot once its deadline has passed.
    pub fn take_due_auto_save(&mut self, now: Instant) -> Option<AutoSaveSlot> {
        if self.auto_save.as_ref().is_some_and(|slot| slot.deadline <= now) {
            return self.auto_save.take();
        }
        None
    }

    /// Marks the document clean if `version` is still current. Returns true when
    /// the dirty flag was cleared.
    pub fn mark_saved(&mut self, path: &Path, version: u64) -> bool {
        let Some(doc) = self.document_mut(path) else {
            return false;
        };
        if doc.version != version || !doc.dirty {
            return false;
        }
        doc.dirty = false;
        true
    }

    /// Removes the document and its pending auto-save. The active path is left to
    /// the caller, which decides what to activate next.
    pub fn remove(&mut self, path: &Path) -> Option<Document> {
        let index = self.documents.iter().position(|d| d.path == path)?;
        self.cancel_auto_save_for(path);
        Some(self.documents.remove(index))
    }

    /// Re-keys an open document in place. Content, dirty flag, version and tab
    /// position are kept; the active path and auto-save slot follow.
    pub fn rekey(&mut self, from: &Path, to: PathBuf) -> bool {
        if from == to || self.is_open(&to) {
            return false;
        }
        let Some(doc) = self.document_mut(from) else {
            return false;
        };
        doc.path = to.clone();
        if self.active.as_deref() == Some(from) {
            self.active = Some(to.clone());
        }
        if let Some(slot) = self.auto_save.as_mut().filter(|slot| slot.path == from) {
            slot.path = to;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
