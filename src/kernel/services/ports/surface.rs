//! Editing surface contract.
//!
//! The surface is the third-party text widget. The session only needs to read its
//! text, push a document into it, and learn about user edits. Pushing content goes
//! through `apply_external_content`, which must never be reported back as a change.

use crate::kernel::language::SyntaxMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    Find,
    Replace,
    GotoLine,
    ToggleComment,
}

pub trait EditorSurface: Send {
    /// Current text of the widget.
    fn text(&self) -> String;

    /// Replace the whole content programmatically. Emits no change.
    fn apply_external_content(&mut self, text: &str, mode: SyntaxMode);

    /// Detach from any document and show an empty buffer. Emits no change.
    fn clear(&mut self);

    /// Content after user edits made since the last call, if any.
    fn take_changes(&mut self) -> Option<String>;

    fn run_action(&mut self, action: SurfaceAction);
}
