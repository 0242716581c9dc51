#![forbid(unsafe_code)]

//! Error types for callable invocation and event membership.

use std::fmt;

/// Why a [`Callable`](crate::Callable) could not be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateError {
    /// The callable has no target.
    NullTarget,
    /// The bound receiver was dropped while the callable was still alive.
    ReceiverDropped,
    /// The bound receiver is already borrowed in a conflicting way (for
    /// example, a method subscriber re-entering itself through the event).
    ReceiverBorrowed,
}

impl DelegateError {
    /// Short stable label (snake_case) for logs and diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullTarget => "callable_null_invocation",
            Self::ReceiverDropped => "callable_receiver_dropped",
            Self::ReceiverBorrowed => "callable_receiver_borrowed",
        }
    }
}

impl fmt::Display for DelegateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullTarget => write!(f, "invoked a null callable"),
            Self::ReceiverDropped => write!(f, "bound receiver no longer exists"),
            Self::ReceiverBorrowed => write!(f, "bound receiver is already borrowed"),
        }
    }
}

impl std::error::Error for DelegateError {}

/// Why a strict subscription change was rejected.
///
/// Returned by [`MulticastEvent::try_subscribe`](crate::MulticastEvent::try_subscribe)
/// and [`MulticastEvent::try_unsubscribe`](crate::MulticastEvent::try_unsubscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventError {
    /// A null callable was passed.
    NullSubscriber,
    /// An equal callable is already subscribed.
    AlreadySubscribed,
    /// No equal callable is subscribed.
    NotSubscribed,
}

impl EventError {
    /// Short stable label (snake_case) for logs and diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullSubscriber => "event_null_subscriber",
            Self::AlreadySubscribed => "event_duplicate_subscriber",
            Self::NotSubscribed => "event_unknown_subscriber",
        }
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullSubscriber => write!(f, "null callable cannot be a subscriber"),
            Self::AlreadySubscribed => write!(f, "callable is already subscribed"),
            Self::NotSubscribed => write!(f, "callable is not subscribed"),
        }
    }
}

impl std::error::Error for EventError {}
