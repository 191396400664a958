//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod clipboard;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod runtime;
pub mod settings;
pub mod surface;

pub use clipboard::ClipboardService;
pub use file::LocalHost;
pub use keybinding::KeybindingService;
pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::AsyncRuntime;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
};
pub use surface::{RopeSurface, SharedRopeSurface};
