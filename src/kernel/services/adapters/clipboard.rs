//! 系统剪贴板（arboard）

use crate::kernel::services::ports::{ClipboardError, ClipboardPort};
use arboard::Clipboard;

/// Holds the system clipboard when one could be opened. Headless sessions get a
/// service that reports `NotAvailable` on every write.
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::info!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { clipboard }
    }

    pub fn is_available(&self) -> bool {
        self.clipboard.is_some()
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
