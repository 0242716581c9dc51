#![forbid(unsafe_code)]

//! Two-tier contract diagnostics.
//!
//! | Severity | Meaning | Behavior |
//! |----------|---------|----------|
//! | [`Severity::Warning`] | Misuse the operation can absorb (duplicate subscribe, removing an absent subscriber) | Logged at WARN; execution continues |
//! | [`Severity::Error`] | Programmer error (invoking or subscribing a null callable) | Logged at ERROR; panics under [`ContractPolicy::Strict`] |
//!
//! Every violation carries a stable snake_case label so tests and log
//! filters can match on it without parsing prose.

use std::fmt;

use tracing::Level;

use crate::contract::ContractPolicy;
use crate::logger;

/// Violation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Warning => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

/// A reported contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub severity: Severity,
    /// Stable snake_case label, e.g. `event_duplicate_subscriber`.
    pub label: &'static str,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(severity: Severity, label: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            label,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contract {} [{}]: {}",
            self.severity.as_str(),
            self.label,
            self.message
        )
    }
}

/// Report a violation under the current thread's policy.
///
/// Returns normally for warnings and for errors under
/// [`ContractPolicy::Lenient`].
///
/// # Panics
///
/// Panics with the violation text when `violation` is an error and the
/// current policy is [`ContractPolicy::Strict`].
pub fn report(violation: &Violation) {
    let text = violation.to_string();
    logger::log(violation.severity.level(), &text);
    if violation.severity == Severity::Error && ContractPolicy::current().panics() {
        panic!("{text}");
    }
}

/// Report a warning-class violation.
pub fn warning(label: &'static str, message: impl Into<String>) {
    report(&Violation::new(Severity::Warning, label, message));
}

/// Report an error-class violation.
///
/// # Panics
///
/// Panics under [`ContractPolicy::Strict`].
pub fn error(label: &'static str, message: impl Into<String>) {
    report(&Violation::new(Severity::Error, label, message));
}
