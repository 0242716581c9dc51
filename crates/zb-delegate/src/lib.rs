#![forbid(unsafe_code)]

//! Delegates: type-erased callables and ordered multicast events.
//!
//! # Role in Zunderbolt
//! `zb-delegate` is the dispatch layer. A [`Callable`] names one function or
//! one method bound to a receiver; a [`MulticastEvent`] calls an ordered list
//! of them with the same arguments.
//!
//! # Primary responsibilities
//! - **signature**: argument tuples and the binding traits for plain `Fn`
//!   types, for every arity from 0 to 12.
//! - **callable**: null-able, comparable, hashable handles with weakly held
//!   receivers.
//! - **event**: subscription management and snapshot delivery.
//!
//! Contract violations (null invocation, duplicate subscription, ...) are
//! reported through `zb-core` diagnostics.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zb_delegate::{Callable, MulticastEvent};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Log {
//!     fn record(&mut self, line: &'static str) {
//!         self.0.push(line.to_owned());
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Log::default()));
//! let closed: MulticastEvent<(&'static str,)> = MulticastEvent::new();
//! closed.subscribe(Callable::from_method(&log, Log::record));
//!
//! closed.emit("window closed");
//! assert_eq!(log.borrow().0, ["window closed"]);
//! ```

/// Invoke `$m!` once per supported arity, with `(Type ident)` pairs.
macro_rules! all_tuples {
    ($m:ident) => {
        $m!();
        $m!(A0 a0);
        $m!(A0 a0, A1 a1);
        $m!(A0 a0, A1 a1, A2 a2);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10);
        $m!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8, A9 a9, A10 a10, A11 a11);
    };
}

mod callable;
mod error;
mod event;
mod list;
mod receiver;
pub mod signature;

pub use callable::{Callable, TargetKind};
pub use error::{DelegateError, EventError};
pub use event::MulticastEvent;
pub use receiver::Receiver;
pub use signature::{ArgList, ConstMethod, ConstMethodPtr, FnPtr, Function, Method, MethodPtr};
