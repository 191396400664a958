use crate::kernel::services::ports::HostRequest;
use crate::kernel::state::{NamePrompt, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Host(HostRequest),
    ChooseDirectory,
    Confirm { message: String },
    PromptName { prompt: NamePrompt, initial: String },
    Notify(Notice),
    CopyToClipboard { text: String },
}
