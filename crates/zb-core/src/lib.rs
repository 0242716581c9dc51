#![forbid(unsafe_code)]

//! Core: internal logging and contract diagnostics for Zunderbolt.
//!
//! # Role in Zunderbolt
//! `zb-core` is the ambient layer every other crate reports through. It owns
//! no engine state; it only decides where diagnostic text goes and how hard a
//! contract violation should fail.
//!
//! # Primary responsibilities
//! - **logger**: a set-once process-wide log hook with a `tracing` default.
//! - **diagnostics**: warning/error contract violations with stable labels.
//! - **contract**: the build-time policy for error-class violations and a
//!   thread-local override for tests.

pub mod contract;
pub mod diagnostics;
pub mod logger;

pub use contract::ContractPolicy;
pub use diagnostics::{Severity, Violation};
pub use logger::LoggerError;
