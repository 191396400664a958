use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::{env, thread};

use lonescode::app::Workbench;
use lonescode::kernel::services::adapters::{
    ensure_settings_file, load_settings, ClipboardService, KeybindingService, LocalHost,
    SharedRopeSurface,
};
use lonescode::kernel::Action;

mod logging;
mod shell;

fn main() -> io::Result<()> {
    let log_guard = logging::init();
    if let Some(guard) = log_guard.as_ref() {
        eprintln!("logs: {}", guard.log_dir().display());
    }

    let cwd = env::current_dir()?;
    let arg = env::args().nth(1);
    let startup = shell::resolve_startup_paths(&cwd, arg.as_deref())?;

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let mut keybindings = KeybindingService::with_defaults();
    keybindings.apply_rules(&settings.keybindings);

    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let surface = SharedRopeSurface::new();
    let mut workbench = Workbench::new(
        settings.session_config(),
        keybindings,
        Arc::new(LocalHost::new()),
        Box::new(surface.clone()),
        Box::new(ClipboardService::new()),
        shell::CliDialogs::new(line_rx),
    )?;

    workbench.dispatch(Action::FolderChosen {
        path: Some(startup.root),
    });
    if let Some(path) = startup.open_file {
        workbench.dispatch(Action::OpenDocument { path });
    }

    shell::run(&mut workbench, &surface);
    tracing::info!("exit");
    Ok(())
}
