//! System clipboard contract. Only writes are needed.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard is not available"),
            ClipboardError::SetFailed(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardPort {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
