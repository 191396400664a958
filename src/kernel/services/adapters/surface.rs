//! Headless editing surface backed by a rope.
//!
//! Used by the line shell and by tests. User edits go through `insert`, `delete`
//! and `replace_all`; only those are reported by `take_changes`.

use crate::kernel::language::SyntaxMode;
use crate::kernel::services::ports::{EditorSurface, SurfaceAction};
use ropey::Rope;
use std::ops::Range;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct RopeSurface {
    rope: Rope,
    mode: Option<SyntaxMode>,
    changed: bool,
    last_action: Option<SurfaceAction>,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode of the content last pushed in, `None` while detached.
    pub fn mode(&self) -> Option<SyntaxMode> {
        self.mode
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let idx = char_idx.min(self.rope.len_chars());
        self.rope.insert(idx, text);
        self.changed = true;
    }

    pub fn append(&mut self, text: &str) {
        self.insert(self.rope.len_chars(), text);
    }

    pub fn delete(&mut self, range: Range<usize>) {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        self.changed = true;
    }

    pub fn replace_all(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        self.rope = Rope::from_str(text);
        self.changed = true;
    }

    pub fn last_action(&self) -> Option<SurfaceAction> {
        self.last_action
    }
}

impl EditorSurface for RopeSurface {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn apply_external_content(&mut self, text: &str, mode: SyntaxMode) {
        self.rope = Rope::from_str(text);
        self.mode = Some(mode);
        self.changed = false;
    }

    fn clear(&mut self) {
        self.rope = Rope::new();
        self.mode = None;
        self.changed = false;
    }

    fn take_changes(&mut self) -> Option<String> {
        if !std::mem::take(&mut self.changed) {
            return None;
        }
        Some(self.rope.to_string())
    }

    fn run_action(&mut self, action: SurfaceAction) {
        tracing::debug!(?action, "surface action");
        self.last_action = Some(action);
    }
}

/// Cloneable handle to one `RopeSurface`. The store owns one clone; the input side
/// keeps another to type into it.
#[derive(Debug, Clone, Default)]
pub struct SharedRopeSurface {
    inner: Arc<Mutex<RopeSurface>>,
}

impl SharedRopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut RopeSurface) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl EditorSurface for SharedRopeSurface {
    fn text(&self) -> String {
        self.with(|s| s.text())
    }

    fn apply_external_content(&mut self, text: &str, mode: SyntaxMode) {
        self.with(|s| s.apply_external_content(text, mode))
    }

    fn clear(&mut self) {
        self.with(|s| s.clear())
    }

    fn take_changes(&mut self) -> Option<String> {
        self.with(|s| s.take_changes())
    }

    fn run_action(&mut self, action: SurfaceAction) {
        self.with(|s| s.run_action(action))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/surface.rs"]
mod tests;
