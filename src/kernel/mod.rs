//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod explorer;
pub mod language;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use explorer::{Explorer, RowKind, TreeRow};
pub use language::SyntaxMode;
pub use session::{AutoSaveSlot, Document, Session};
pub use state::{AppState, ConfirmState, NamePrompt, Notice, NoticeLevel, PendingAction};
pub use store::{DispatchResult, Store};
