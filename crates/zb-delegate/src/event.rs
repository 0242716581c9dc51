#![forbid(unsafe_code)]

//! Ordered multicast event.
//!
//! # Design
//!
//! [`MulticastEvent<Args, R>`] owns an ordered list of
//! [`Callable<Args, R>`] values. Raising the event calls every subscriber in
//! subscription order with the same arguments; return values are discarded.
//!
//! All operations take `&self`. The list lives in a `RefCell` that is only
//! borrowed for the duration of the list operation itself, never while a
//! subscriber runs, so a subscriber that can reach the event (through an
//! `Rc`/`Weak`) may subscribe or unsubscribe during a raise.
//!
//! # Invariants
//!
//! 1. The list never contains a null callable.
//! 2. Subscribers are invoked in the order they were subscribed.
//! 3. A raise delivers to the subscribers present when it started: callables
//!    added during the raise are first called by the next raise, callables
//!    removed during the raise still receive the current one.
//! 4. Unsubscribing removes only the first equal entry.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Duplicate subscribe | Equal callable already present | Warning; appended anyway |
//! | Unknown unsubscribe | No equal callable present | Warning; no-op |
//! | Null subscribe/unsubscribe | `Callable::null()` passed | Error-class violation; no-op under lenient policy |
//! | Broken subscriber | Receiver dropped or busy during raise | Error-class violation; remaining subscribers still run under lenient policy |
//!
//! The `try_` variants reject duplicates, unknown and null callables with an
//! [`EventError`] instead, without touching the list or reporting anything.
//!
//! # Thread safety
//!
//! Not thread-safe (`!Send`, `!Sync`). Share an event across threads only by
//! building a synchronized wrapper around it.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use zb_delegate::{Callable, MulticastEvent};
//!
//! fn double(total: &Cell<i32>) {
//!     total.set(total.get() * 2);
//! }
//!
//! fn increment(total: &Cell<i32>) {
//!     total.set(total.get() + 1);
//! }
//!
//! let total = Cell::new(3);
//! let changed: MulticastEvent<(&Cell<i32>,)> = MulticastEvent::new();
//! changed.subscribe(Callable::from_fn(double));
//! changed.subscribe(Callable::from_fn(increment));
//!
//! changed.emit(&total);
//! assert_eq!(total.get(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;

use zb_core::diagnostics;

use crate::callable::Callable;
use crate::error::EventError;
use crate::list::SubscriberList;
use crate::signature::ArgList;

#[cfg(feature = "tracing")]
use tracing::trace;

/// An ordered set of subscribers invoked together.
pub struct MulticastEvent<Args, R = ()> {
    subscribers: RefCell<SubscriberList<Callable<Args, R>>>,
}

impl<Args, R> Default for MulticastEvent<Args, R> {
    fn default() -> Self {
        Self {
            subscribers: RefCell::new(SubscriberList::default()),
        }
    }
}

/// Copies the subscriber list; the copy is an independent event.
impl<Args, R> Clone for MulticastEvent<Args, R> {
    fn clone(&self) -> Self {
        Self {
            subscribers: RefCell::new(self.subscribers.borrow().clone()),
        }
    }
}

impl<Args, R> fmt::Debug for MulticastEvent<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.borrow();
        f.debug_struct("MulticastEvent")
            .field("subscriber_count", &subscribers.len())
            .field("subscribers", &subscribers.to_vec())
            .finish()
    }
}

impl<Args: ArgList, R> MulticastEvent<Args, R> {
    /// Number of parameters in the signature.
    pub const ARITY: usize = Args::ARITY;

    /// Create an event with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters in the signature.
    #[inline]
    #[must_use]
    pub const fn parameter_count(&self) -> usize {
        Args::ARITY
    }

    /// Append `callable` to the subscriber list.
    ///
    /// A callable that is already subscribed is reported as a warning and
    /// appended again; it will then run once per subscription.
    ///
    /// # Panics
    ///
    /// Panics under the strict contract policy if `callable` is null.
    #[track_caller]
    pub fn subscribe(&self, callable: Callable<Args, R>) {
        if callable.is_null() {
            let err = EventError::NullSubscriber;
            diagnostics::error(err.as_str(), format!("subscribe: {err}"));
            return;
        }
        let duplicate = self.subscribers.borrow().contains(&callable);
        if duplicate {
            let err = EventError::AlreadySubscribed;
            diagnostics::warning(err.as_str(), format!("subscribe: {err}: {callable:?}"));
        }
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.push(callable);

        #[cfg(feature = "tracing")]
        trace!(subscribers = subscribers.len(), duplicate, "event subscribe");
    }

    /// Append `callable` unless it is null or already subscribed.
    ///
    /// # Errors
    ///
    /// [`EventError::NullSubscriber`] or [`EventError::AlreadySubscribed`];
    /// the list is unchanged in both cases.
    pub fn try_subscribe(&self, callable: Callable<Args, R>) -> Result<(), EventError> {
        if callable.is_null() {
            return Err(EventError::NullSubscriber);
        }
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.contains(&callable) {
            return Err(EventError::AlreadySubscribed);
        }
        subscribers.push(callable);
        Ok(())
    }

    /// Remove the first subscriber equal to `callable`.
    ///
    /// Removing a callable that is not subscribed is reported as a warning
    /// and leaves the list unchanged.
    ///
    /// # Panics
    ///
    /// Panics under the strict contract policy if `callable` is null.
    #[track_caller]
    pub fn unsubscribe(&self, callable: &Callable<Args, R>) {
        if callable.is_null() {
            let err = EventError::NullSubscriber;
            diagnostics::error(err.as_str(), format!("unsubscribe: {err}"));
            return;
        }
        let removed = self.subscribers.borrow_mut().remove_first(callable);
        if !removed {
            let err = EventError::NotSubscribed;
            diagnostics::warning(err.as_str(), format!("unsubscribe: {err}: {callable:?}"));
        }

        #[cfg(feature = "tracing")]
        trace!(
            subscribers = self.subscribers.borrow().len(),
            removed,
            "event unsubscribe"
        );
    }

    /// Remove the first subscriber equal to `callable`.
    ///
    /// # Errors
    ///
    /// [`EventError::NullSubscriber`] or [`EventError::NotSubscribed`]; the
    /// list is unchanged in both cases.
    pub fn try_unsubscribe(&self, callable: &Callable<Args, R>) -> Result<(), EventError> {
        if callable.is_null() {
            return Err(EventError::NullSubscriber);
        }
        if self.subscribers.borrow_mut().remove_first(callable) {
            Ok(())
        } else {
            Err(EventError::NotSubscribed)
        }
    }

    /// Remove every subscriber.
    pub fn unsubscribe_all(&self) {
        self.subscribers.borrow_mut().clear();

        #[cfg(feature = "tracing")]
        trace!("event unsubscribe_all");
    }

    /// Drop subscribers whose receiver no longer exists. Returns how many
    /// were removed.
    pub fn retain_alive(&self) -> usize {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|c| c.is_alive());
        before - subscribers.len()
    }

    /// Whether a subscriber equal to `callable` is present.
    #[must_use]
    pub fn contains(&self, callable: &Callable<Args, R>) -> bool {
        self.subscribers.borrow().contains(callable)
    }

    /// Number of subscriptions (duplicates counted separately).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Whether there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    /// Snapshot of the subscriber list in raise order. Changing the returned
    /// vector does not affect the event.
    #[must_use]
    pub fn subscribers(&self) -> Vec<Callable<Args, R>> {
        self.subscribers.borrow().to_vec()
    }

    /// Call every subscriber, in subscription order, with `args`.
    ///
    /// Each subscriber but the last receives a clone of `args`; pass shared
    /// references (`&Cell<T>`, `&RefCell<T>`) to let subscribers see each
    /// other's changes.
    ///
    /// # Panics
    ///
    /// Under the strict contract policy, panics at the first subscriber that
    /// cannot be reached; later subscribers are not called.
    #[track_caller]
    pub fn raise(&self, args: Args)
    where
        Args: Clone,
    {
        let snapshot = self.subscribers.borrow().snapshot();

        #[cfg(feature = "tracing")]
        trace!(subscribers = snapshot.len(), "event raise");

        if let Some((last, rest)) = snapshot.split_last() {
            for subscriber in rest {
                Self::deliver(subscriber, args.clone());
            }
            Self::deliver(last, args);
        }
    }

    #[track_caller]
    fn deliver(subscriber: &Callable<Args, R>, args: Args) {
        if let Err(err) = subscriber.try_call(args) {
            diagnostics::error(err.as_str(), format!("raise: {err}: {subscriber:?}"));
        }
    }
}

macro_rules! impl_emit {
    ($($A:ident $a:ident),*) => {
        impl<$($A: Clone,)* R> MulticastEvent<($($A,)*), R> {
            /// Raise the event with positional arguments.
            ///
            /// # Panics
            ///
            /// See [`MulticastEvent::raise`].
            #[inline]
            #[track_caller]
            pub fn emit(&self $(, $a: $A)*) {
                self.raise(($($a,)*));
            }
        }
    };
}

all_tuples!(impl_emit);

impl<Args: ArgList, R> FromIterator<Callable<Args, R>> for MulticastEvent<Args, R> {
    fn from_iter<I: IntoIterator<Item = Callable<Args, R>>>(iter: I) -> Self {
        let mut event = Self::new();
        event.extend(iter);
        event
    }
}

/// Subscribes each callable in order, with the same checks as
/// [`MulticastEvent::subscribe`].
impl<Args: ArgList, R> Extend<Callable<Args, R>> for MulticastEvent<Args, R> {
    fn extend<I: IntoIterator<Item = Callable<Args, R>>>(&mut self, iter: I) {
        for callable in iter {
            self.subscribe(callable);
        }
    }
}
