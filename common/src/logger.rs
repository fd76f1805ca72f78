use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped logger writing to stderr, so stdout stays reserved for the
/// game's prompts and board.
pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    /// Returns whether a line was written.
    pub fn log(&self, message: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, message));
        true
    }
}

pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

/// Messages logged before `init_logger` are dropped.
pub fn log(message: &str) {
    try_log(message);
}

/// Like `log`, but reports `false` when the message was dropped because the
/// logger is missing or disabled.
pub fn try_log(message: &str) -> bool {
    LOGGER.get().is_some_and(|logger| logger.log(message))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
