//! Semantic commands.
//!
//! Commands name what the user wants, not which key produced it. The editing
//! surface owns the last four passthrough actions; everything else is handled by
//! the session store.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Files ====================
    Save,
    CloseTab,
    OpenFolder,
    NewFile,
    NewFolder,
    CopyPath,

    // ==================== Editing surface passthrough ====================
    Find,
    Replace,
    GotoLine,
    ToggleComment,

    // ==================== System ====================
    Quit,

    // ==================== Extension point ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Save => "save",
            Command::CloseTab => "closeTab",
            Command::OpenFolder => "openFolder",
            Command::NewFile => "newFile",
            Command::NewFolder => "newFolder",
            Command::CopyPath => "copyPath",
            Command::Find => "find",
            Command::Replace => "replace",
            Command::GotoLine => "gotoLine",
            Command::ToggleComment => "toggleComment",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "save" => Command::Save,
            "closeTab" => Command::CloseTab,
            "openFolder" => Command::OpenFolder,
            "newFile" => Command::NewFile,
            "newFolder" => Command::NewFolder,
            "copyPath" => Command::CopyPath,
            "find" => Command::Find,
            "replace" => Command::Replace,
            "gotoLine" => Command::GotoLine,
            "toggleComment" => Command::ToggleComment,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
