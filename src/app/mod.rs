//! Application layer: drives the store, the host runtime and the user's dialogs.

pub mod workbench;

pub use workbench::{Dialogs, Workbench};
