#![forbid(unsafe_code)]

//! Shared access to bound receivers.
//!
//! A const-method callable can be bound to an `Rc<T>` or to an
//! `Rc<RefCell<T>>`; [`Receiver`] lets both hand out `&T` for the duration of
//! one call. Mutable method callables always go through `RefCell<T>`.

use std::cell::RefCell;

use crate::error::DelegateError;

/// Storage that can lend a shared reference to a `T`.
pub trait Receiver<T: ?Sized> {
    /// Run `f` with a shared borrow of the receiver.
    ///
    /// # Errors
    ///
    /// [`DelegateError::ReceiverBorrowed`] if the receiver is mutably borrowed.
    fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, DelegateError>;
}

impl<T: ?Sized> Receiver<T> for T {
    #[inline]
    fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, DelegateError> {
        Ok(f(self))
    }
}

impl<T: ?Sized> Receiver<T> for RefCell<T> {
    #[inline]
    fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, DelegateError> {
        let guard = self
            .try_borrow()
            .map_err(|_| DelegateError::ReceiverBorrowed)?;
        Ok(f(&*guard))
    }
}

/// Run `f` with an exclusive borrow of a `RefCell` receiver.
#[inline]
pub(crate) fn with_mut<T: ?Sized, R>(
    cell: &RefCell<T>,
    f: impl FnOnce(&mut T) -> R,
) -> Result<R, DelegateError> {
    let mut guard = cell
        .try_borrow_mut()
        .map_err(|_| DelegateError::ReceiverBorrowed)?;
    Ok(f(&mut *guard))
}
