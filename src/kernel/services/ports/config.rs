use std::time::Duration;

pub const DEFAULT_AUTO_SAVE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub auto_save: bool,
    pub auto_save_delay: Duration,
    pub show_hidden: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_save: true,
            auto_save_delay: DEFAULT_AUTO_SAVE_DELAY,
            show_hidden: true,
        }
    }
}
