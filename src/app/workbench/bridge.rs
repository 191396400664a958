use super::{Dialogs, Workbench};
use crate::kernel::{Action, Effect, Notice, NoticeLevel};

impl<D: Dialogs> Workbench<D> {
    pub(super) fn dispatch_kernel(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let mut changed = result.state_changed;
        for effect in result.effects {
            changed |= self.run_effect(effect);
        }
        changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Host(request) => {
                self.in_flight += 1;
                self.runtime.submit(request);
                false
            }
            Effect::ChooseDirectory => {
                let path = self.dialogs.choose_directory();
                self.dispatch_kernel(Action::FolderChosen { path })
            }
            Effect::Confirm { message } => {
                let action = if self.dialogs.confirm(&message) {
                    Action::ConfirmAccept
                } else {
                    Action::ConfirmCancel
                };
                self.dispatch_kernel(action)
            }
            Effect::PromptName { prompt, initial } => {
                match self.dialogs.prompt_name(&prompt, &initial) {
                    Some(name) => self.dispatch_kernel(Action::NameEntered { prompt, name }),
                    None => false,
                }
            }
            Effect::Notify(notice) => {
                if notice.level == NoticeLevel::Error {
                    tracing::debug!(message = %notice.message, "error notice");
                }
                self.dialogs.notify(&notice);
                false
            }
            Effect::CopyToClipboard { text } => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!(error = %e, "copy to clipboard failed");
                    let notice = Notice::error(format!("Could not copy to clipboard: {e}"));
                    self.dialogs.notify(&notice);
                }
                false
            }
        }
    }
}
