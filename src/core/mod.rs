//! Core vocabulary shared by every layer:
//! - Command: semantic commands, independent of the key that triggers them
//! - Key: normalized key chord used by the keybinding table

pub mod command;
pub mod event;

pub use command::Command;
pub use event::Key;
