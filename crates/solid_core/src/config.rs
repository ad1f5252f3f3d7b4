//! Runtime configuration for diagnostics.
//!
//! # Invariants
//! - File logging is opt-in: no log directory means no logger.
//! - Unset level falls back to [`default_log_level`].

/// Environment variable naming the absolute log directory.
pub const LOG_DIR_ENV: &str = "SOLID_LOG_DIR";
/// Environment variable naming the log level.
pub const LOG_LEVEL_ENV: &str = "SOLID_LOG_LEVEL";

/// Logger configuration as supplied by the caller.
///
/// Values are raw; [`crate::logging::init_logging`] normalizes and
/// validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub log_dir: String,
}

impl LogConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// Returns `None` when [`LOG_DIR_ENV`] is unset or blank.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let log_dir = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty())?;
        let level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self::new(level, log_dir))
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
