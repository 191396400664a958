//! 快捷键：按键 → 命令

use crate::core::event::Key;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bindings(&self) -> &FxHashMap<Key, Command> {
        &self.bindings
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// Applies user overrides in order. An empty command unbinds the key; rules with
    /// an unparsable key are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with invalid key");
                continue;
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(&key);
            } else {
                self.bind(key, Command::from_name(rule.command.trim()));
            }
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFolder);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);
    bindings.insert(
        Key::new(
            KeyCode::Char('n'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ),
        Command::NewFolder,
    );
    bindings.insert(
        Key::new(KeyCode::Char('c'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        Command::CopyPath,
    );
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    bindings.insert(Key::ctrl(KeyCode::Char('f')), Command::Find);
    bindings.insert(Key::ctrl(KeyCode::Char('h')), Command::Replace);
    bindings.insert(Key::ctrl(KeyCode::Char('g')), Command::GotoLine);
    bindings.insert(Key::ctrl(KeyCode::Char('/')), Command::ToggleComment);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
