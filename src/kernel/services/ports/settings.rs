use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::SessionConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub explorer: ExplorerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
    #[serde(default = "default_auto_save_delay_ms")]
    pub auto_save_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerSettings {
    #[serde(default = "default_show_hidden")]
    pub show_hidden: bool,
}

fn default_auto_save() -> bool {
    true
}

fn default_auto_save_delay_ms() -> u64 {
    1500
}

fn default_show_hidden() -> bool {
    true
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            auto_save: default_auto_save(),
            auto_save_delay_ms: default_auto_save_delay_ms(),
        }
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            show_hidden: default_show_hidden(),
        }
    }
}

impl Settings {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            auto_save: self.session.auto_save,
            auto_save_delay: Duration::from_millis(self.session.auto_save_delay_ms),
            show_hidden: self.explorer.show_hidden,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
