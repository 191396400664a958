//! 工作台：把 store、host runtime 与对话框串起来

use crate::core::{Command, Key};
use crate::kernel::services::adapters::{AsyncRuntime, KeybindingService};
use crate::kernel::services::ports::{
    ClipboardPort, EditorSurface, HostReply, HostService, SessionConfig,
};
use crate::kernel::{Action, AppState, NamePrompt, Notice, Store};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Instant;

mod bridge;
mod tick;

const MAX_HOST_DRAIN_PER_TICK: usize = 256;

/// Blocking user interaction. Each call returns once the user has answered.
pub trait Dialogs {
    fn choose_directory(&mut self) -> Option<PathBuf>;

    fn confirm(&mut self, message: &str) -> bool;

    /// `None` when the user dismissed the prompt.
    fn prompt_name(&mut self, prompt: &NamePrompt, initial: &str) -> Option<String>;

    fn notify(&mut self, notice: &Notice);
}

pub struct Workbench<D: Dialogs> {
    store: Store,
    runtime: AsyncRuntime,
    host_rx: Receiver<HostReply>,
    in_flight: usize,
    keybindings: KeybindingService,
    clipboard: Box<dyn ClipboardPort>,
    dialogs: D,
    quit_requested: bool,
}

impl<D: Dialogs> Workbench<D> {
    pub fn new(
        config: SessionConfig,
        keybindings: KeybindingService,
        host: Arc<dyn HostService>,
        surface: Box<dyn EditorSurface>,
        clipboard: Box<dyn ClipboardPort>,
        dialogs: D,
    ) -> std::io::Result<Self> {
        let (tx, host_rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx, host)?;
        tracing::info!(
            auto_save = config.auto_save,
            auto_save_delay_ms = config.auto_save_delay.as_millis() as u64,
            show_hidden = config.show_hidden,
            "workbench started"
        );
        Ok(Self {
            store: Store::new(AppState::new(config), surface),
            runtime,
            host_rx,
            in_flight: 0,
            keybindings,
            clipboard,
            dialogs,
            quit_requested: false,
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn surface(&self) -> &dyn EditorSurface {
        self.store.surface()
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Host requests submitted but not answered yet.
    pub fn pending_host_requests(&self) -> usize {
        self.in_flight
    }

    /// Dispatches `action` after folding in any pending surface edits, so the store
    /// never acts on a stale buffer.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut changed = self.pump_surface(Instant::now());
        changed |= self.dispatch_kernel(action);
        changed
    }

    pub fn run_command(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            tracing::info!("quit requested");
            self.quit_requested = true;
            return false;
        }
        self.dispatch(Action::RunCommand(command))
    }

    /// Returns false when the key is unbound.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let Some(command) = self.keybindings.resolve(&key).cloned() else {
            return false;
        };
        tracing::debug!(command = command.name(), "key command");
        self.run_command(command);
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
