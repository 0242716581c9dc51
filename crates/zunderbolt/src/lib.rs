#![forbid(unsafe_code)]

//! Zunderbolt: delegates and multicast events.
//!
//! This crate re-exports the public API of the workspace crates:
//!
//! - [`zb_core`]: the internal log hook, contract diagnostics, and contract policy.
//! - [`zb_delegate`]: [`Callable`] and [`MulticastEvent`].
//!
//! Most code only needs the [`prelude`].
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zunderbolt::prelude::*;
//!
//! #[derive(Default)]
//! struct Counter(u32);
//!
//! impl Counter {
//!     fn bump(&mut self, by: u32) {
//!         self.0 += by;
//!     }
//! }
//!
//! let counter = Rc::new(RefCell::new(Counter::default()));
//! let ticked: MulticastEvent<(u32,)> = MulticastEvent::new();
//! ticked.subscribe(Callable::from_method(&counter, Counter::bump));
//!
//! ticked.emit(2);
//! ticked.emit(3);
//! assert_eq!(counter.borrow().0, 5);
//! ```

pub use zb_core;
pub use zb_delegate;

pub use zb_core::{ContractPolicy, LoggerError, Severity, Violation};
pub use zb_delegate::{
    ArgList, Callable, ConstMethod, DelegateError, EventError, Function, Method, MulticastEvent,
    Receiver, TargetKind,
};

/// The types most callers need.
pub mod prelude {
    pub use zb_core::ContractPolicy;
    pub use zb_delegate::{Callable, DelegateError, EventError, MulticastEvent, TargetKind};
}
