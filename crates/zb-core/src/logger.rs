#![forbid(unsafe_code)]

//! Process-wide internal log hook.
//!
//! Lower layers that need to emit diagnostic text (contract violations,
//! dispatch failures) call [`log`] instead of depending on a concrete logger.
//! An application may route that text elsewhere by installing a hook once,
//! at startup, with [`install`].
//!
//! # Invariants
//!
//! 1. **Set once**: the first successful [`install`] wins for the lifetime of
//!    the process. Later calls fail with [`LoggerError::AlreadyInstalled`] and
//!    leave the installed hook untouched.
//! 2. **Default sink**: until a hook is installed, messages become `tracing`
//!    events with target `zunderbolt` at the requested level, so output is
//!    controlled by whatever subscriber the application configured.
//! 3. **Read-only after install**: [`log`] never blocks on a lock; the hook is
//!    published through a `OnceLock`.
//!
//! # Example
//!
//! ```
//! use zb_core::logger;
//! use tracing::Level;
//!
//! // Without a hook the message goes to `tracing`.
//! logger::log(Level::INFO, "engine starting");
//! ```

use std::fmt;
use std::sync::OnceLock;

use tracing::Level;

/// Signature of an installed log hook.
pub type LogFn = Box<dyn Fn(Level, &str) + Send + Sync>;

static HOOK: OnceLock<LogFn> = OnceLock::new();

/// Errors from log hook management.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerError {
    /// A hook was already installed in this process.
    AlreadyInstalled,
}

impl LoggerError {
    /// Short stable label for logs and assertions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyInstalled => "logger_already_installed",
        }
    }
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled => write!(f, "internal log hook is already installed"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the process-wide log hook.
///
/// # Errors
///
/// Returns [`LoggerError::AlreadyInstalled`] if a hook was installed before.
pub fn install(hook: impl Fn(Level, &str) + Send + Sync + 'static) -> Result<(), LoggerError> {
    HOOK.set(Box::new(hook)).map_err(|_| LoggerError::AlreadyInstalled)
}

/// Whether a hook has been installed.
#[must_use]
pub fn is_installed() -> bool {
    HOOK.get().is_some()
}

/// Emit a message through the installed hook, or through `tracing` if none.
pub fn log(level: Level, message: &str) {
    match HOOK.get() {
        Some(hook) => hook(level, message),
        None => default_sink(level, message),
    }
}

fn default_sink(level: Level, message: &str) {
    // `tracing` macros need the level as a constant.
    match level {
        Level::ERROR => tracing::error!(target: "zunderbolt", "{message}"),
        Level::WARN => tracing::warn!(target: "zunderbolt", "{message}"),
        Level::INFO => tracing::info!(target: "zunderbolt", "{message}"),
        Level::DEBUG => tracing::debug!(target: "zunderbolt", "{message}"),
        _ => tracing::trace!(target: "zunderbolt", "{message}"),
    }
}
