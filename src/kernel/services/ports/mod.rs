//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod config;
pub mod host;
pub mod settings;
pub mod surface;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use config::SessionConfig;
pub use host::{
    DirEntry, FailureReason, HostError, HostErrorKind, HostReply, HostRequest, HostService,
    SaveOrigin,
};
pub use settings::{ExplorerSettings, KeybindingRule, SessionSettings, Settings};
pub use surface::{EditorSurface, SurfaceAction};
