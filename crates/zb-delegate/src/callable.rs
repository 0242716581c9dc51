#![forbid(unsafe_code)]

//! Type-erased callable with value equality.
//!
//! # Design
//!
//! A [`Callable<Args, R>`] is either null or holds one shared, type-erased
//! target behind an `Rc`. Three kinds of target exist:
//!
//! | Kind | Constructor | Receiver |
//! |------|-------------|----------|
//! | [`TargetKind::Function`] | [`Callable::from_fn`] | none |
//! | [`TargetKind::Method`] | [`Callable::from_method`] | `Weak<RefCell<T>>` |
//! | [`TargetKind::ConstMethod`] | [`Callable::from_const_method`] | `Weak<T>` or `Weak<RefCell<T>>` |
//!
//! Receivers are never owned. Binding takes `&Rc<..>` and keeps a `Weak`, so
//! a callable (or an event holding it) does not extend the receiver's life.
//! Calling through a dropped receiver is reported as
//! [`DelegateError::ReceiverDropped`].
//!
//! Receivers may be trait objects (`Rc<dyn Shape>`,
//! `Rc<RefCell<dyn Shape>>`). Binding the trait's method path, e.g.
//! `<dyn Shape>::area`, dispatches through the vtable on every call, so the
//! receiver's concrete type decides which implementation runs.
//!
//! # Equality
//!
//! Two callables are equal when they name the same function and, for method
//! targets, the same receiver allocation.
//!
//! - Zero-sized functions (fn items, capture-free closures) are identified by
//!   their type: binding `add` twice yields equal callables.
//! - Anything with captured state is identified by the allocation made when it
//!   was bound: clones are equal, separately bound closures are not.
//! - `fn` pointers bound through the `_ptr` constructors
//!   ([`Callable::from_fn_ptr`], [`Callable::from_method_ptr`],
//!   [`Callable::from_const_method_ptr`]) are identified by the pointer, so a
//!   handler kept in a `fn` table can be rebound later and still compare equal.
//!   Passed to the generic constructors, a `fn` pointer is ordinary captured
//!   state.
//! - Two null callables are equal.
//!
//! `Hash` agrees with equality, so callables can key a `HashSet`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Null call | Calling a null callable | [`DelegateError::NullTarget`] |
//! | Dead receiver | Receiver `Rc` dropped | [`DelegateError::ReceiverDropped`] |
//! | Re-entrant receiver | Receiver already mutably borrowed | [`DelegateError::ReceiverBorrowed`] |
//!
//! [`Callable::try_call`] returns these errors; [`Callable::call`] reports them
//! as error-class contract violations and panics.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zb_delegate::Callable;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! struct Scale(i32);
//! impl Scale {
//!     fn apply(&self, x: i32) -> i32 {
//!         x * self.0
//!     }
//! }
//!
//! let sum: Callable<(i32, i32), i32> = Callable::from_fn(add);
//! assert_eq!(sum.invoke(2, 3), 5);
//!
//! let triple = Rc::new(Scale(3));
//! let scaled: Callable<(i32,), i32> = Callable::from_const_method(&triple, Scale::apply);
//! assert_eq!(scaled.invoke(4), 12);
//! assert_eq!(scaled, Callable::from_const_method(&triple, Scale::apply));
//! ```

use std::any::TypeId;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use zb_core::diagnostics;

use crate::error::DelegateError;
use crate::receiver::{self, Receiver};
use crate::signature::{ArgList, ConstMethod, ConstMethodPtr, FnPtr, Function, Method, MethodPtr};

/// What a callable is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Null,
    Function,
    Method,
    ConstMethod,
}

impl TargetKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Function => "function",
            Self::Method => "method",
            Self::ConstMethod => "const_method",
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FunctionId {
    /// Zero-sized function: its type is its identity.
    Type(TypeId),
    /// Stateful function: the target allocation is its identity.
    Allocation(*const ()),
    /// `fn` pointer: its address is its identity.
    Pointer(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TargetId {
    receiver: Option<*const ()>,
    function: FunctionId,
}

fn function_id<F: 'static, Args, R>(
    target: &Rc<dyn Target<Args, R>>,
    pointer: Option<usize>,
) -> FunctionId {
    if let Some(addr) = pointer {
        FunctionId::Pointer(addr)
    } else if size_of::<F>() == 0 {
        FunctionId::Type(TypeId::of::<F>())
    } else {
        FunctionId::Allocation(Rc::as_ptr(target).cast::<()>())
    }
}

// ---------------------------------------------------------------------------
// Erased targets
// ---------------------------------------------------------------------------

trait Target<Args, R> {
    fn invoke(&self, args: Args) -> Result<R, DelegateError>;

    fn is_alive(&self) -> bool;
}

struct FnTarget<F>(F);

impl<F, Args, R> Target<Args, R> for FnTarget<F>
where
    F: Function<Args, R>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Result<R, DelegateError> {
        Ok(self.0.call_with(args))
    }

    fn is_alive(&self) -> bool {
        true
    }
}

struct MethodTarget<T: ?Sized, M> {
    receiver: Weak<RefCell<T>>,
    method: M,
}

impl<T, M, Args, R> Target<Args, R> for MethodTarget<T, M>
where
    T: ?Sized,
    M: Method<T, Args, R>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Result<R, DelegateError> {
        let receiver = self
            .receiver
            .upgrade()
            .ok_or(DelegateError::ReceiverDropped)?;
        receiver::with_mut(&*receiver, |target| self.method.call_with(target, args))
    }

    fn is_alive(&self) -> bool {
        self.receiver.strong_count() > 0
    }
}

struct ConstMethodTarget<S: ?Sized, T: ?Sized, M> {
    receiver: Weak<S>,
    method: M,
    _target: PhantomData<fn(&T)>,
}

impl<S, T, M, Args, R> Target<Args, R> for ConstMethodTarget<S, T, M>
where
    S: Receiver<T> + ?Sized,
    T: ?Sized,
    M: ConstMethod<T, Args, R>,
{
    #[inline]
    fn invoke(&self, args: Args) -> Result<R, DelegateError> {
        let receiver = self
            .receiver
            .upgrade()
            .ok_or(DelegateError::ReceiverDropped)?;
        <S as Receiver<T>>::with_ref(&*receiver, |target| self.method.call_with(target, args))
    }

    fn is_alive(&self) -> bool {
        self.receiver.strong_count() > 0
    }
}

struct Bound<Args, R> {
    kind: TargetKind,
    id: TargetId,
    name: &'static str,
    target: Rc<dyn Target<Args, R>>,
}

impl<Args, R> Clone for Bound<Args, R> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            id: self.id,
            name: self.name,
            target: Rc::clone(&self.target),
        }
    }
}

// ---------------------------------------------------------------------------
// Callable
// ---------------------------------------------------------------------------

/// A null-able, cloneable, comparable handle to one function or bound method.
///
/// `Args` is the argument tuple and `R` the return type:
/// `Callable<(i32, i32), i32>` calls something shaped like `fn(i32, i32) -> i32`.
///
/// Cloning is cheap (one `Rc` increment) and clones compare equal.
/// `Callable` is neither `Send` nor `Sync`.
pub struct Callable<Args, R = ()> {
    bound: Option<Bound<Args, R>>,
}

impl<Args, R> Clone for Callable<Args, R> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound.clone(),
        }
    }
}

impl<Args, R> Default for Callable<Args, R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<Args, R> Callable<Args, R> {
    /// A callable with no target.
    #[must_use]
    pub const fn null() -> Self {
        Self { bound: None }
    }

    /// Whether the callable has no target.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.bound.is_none()
    }

    /// Drop the target, making the callable null.
    pub fn reset(&mut self) {
        self.bound = None;
    }

    /// The kind of target currently bound.
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        self.bound.as_ref().map_or(TargetKind::Null, |b| b.kind)
    }

    /// Type name of the bound function, for diagnostics.
    #[must_use]
    pub fn target_name(&self) -> Option<&'static str> {
        self.bound.as_ref().map(|b| b.name)
    }

    /// Whether a call could currently reach its target: false when null or
    /// when the bound receiver has been dropped.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.bound.as_ref().is_some_and(|b| b.target.is_alive())
    }

    fn id(&self) -> Option<TargetId> {
        self.bound.as_ref().map(|b| b.id)
    }
}

impl<Args: ArgList, R> Callable<Args, R> {
    /// Number of parameters in the signature.
    pub const ARITY: usize = Args::ARITY;

    /// Number of parameters in the signature.
    #[inline]
    #[must_use]
    pub const fn parameter_count(&self) -> usize {
        Args::ARITY
    }

    /// Bind a free function, associated function, or closure.
    #[must_use]
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Function<Args, R>,
    {
        Self::bind_fn(function, None)
    }

    fn bind_fn<F>(function: F, pointer: Option<usize>) -> Self
    where
        F: Function<Args, R>,
    {
        let target: Rc<dyn Target<Args, R>> = Rc::new(FnTarget(function));
        let id = TargetId {
            receiver: None,
            function: function_id::<F, Args, R>(&target, pointer),
        };
        Self::bind(TargetKind::Function, id, std::any::type_name::<F>(), target)
    }

    /// Bind a `&mut self` method to `receiver`.
    ///
    /// Only a `Weak` reference to the receiver is kept.
    #[must_use]
    pub fn from_method<T, M>(receiver: &Rc<RefCell<T>>, method: M) -> Self
    where
        T: ?Sized + 'static,
        M: Method<T, Args, R>,
    {
        Self::bind_method(receiver, method, None)
    }

    fn bind_method<T, M>(receiver: &Rc<RefCell<T>>, method: M, pointer: Option<usize>) -> Self
    where
        T: ?Sized + 'static,
        M: Method<T, Args, R>,
    {
        let target: Rc<dyn Target<Args, R>> = Rc::new(MethodTarget {
            receiver: Rc::downgrade(receiver),
            method,
        });
        let id = TargetId {
            receiver: Some(Rc::as_ptr(receiver).cast::<()>()),
            function: function_id::<M, Args, R>(&target, pointer),
        };
        Self::bind(TargetKind::Method, id, std::any::type_name::<M>(), target)
    }

    /// Bind a `&self` method to `receiver`, which may be `Rc<T>` or
    /// `Rc<RefCell<T>>`.
    ///
    /// Only a `Weak` reference to the receiver is kept. There is no overload
    /// resolution between `&self` and `&mut self` methods: the constructor
    /// chosen decides which kind is bound.
    #[must_use]
    pub fn from_const_method<S, T, M>(receiver: &Rc<S>, method: M) -> Self
    where
        S: Receiver<T> + ?Sized + 'static,
        T: ?Sized + 'static,
        M: ConstMethod<T, Args, R>,
    {
        Self::bind_const_method(receiver, method, None)
    }

    fn bind_const_method<S, T, M>(receiver: &Rc<S>, method: M, pointer: Option<usize>) -> Self
    where
        S: Receiver<T> + ?Sized + 'static,
        T: ?Sized + 'static,
        M: ConstMethod<T, Args, R>,
    {
        let target: Rc<dyn Target<Args, R>> = Rc::new(ConstMethodTarget {
            receiver: Rc::downgrade(receiver),
            method,
            _target: PhantomData::<fn(&T)>,
        });
        let id = TargetId {
            receiver: Some(Rc::as_ptr(receiver).cast::<()>()),
            function: function_id::<M, Args, R>(&target, pointer),
        };
        Self::bind(TargetKind::ConstMethod, id, std::any::type_name::<M>(), target)
    }

    /// Bind a `fn` pointer. Bindings of the same pointer compare equal.
    ///
    /// The pointer's argument and return types must be `'static`.
    #[must_use]
    pub fn from_fn_ptr<P>(function: P) -> Self
    where
        P: FnPtr<Args, R>,
    {
        Self::bind_fn(function, Some(function.address()))
    }

    /// Bind a `&mut self` method given as a `fn` pointer. Bindings of the
    /// same pointer to the same receiver compare equal.
    #[must_use]
    pub fn from_method_ptr<T, P>(receiver: &Rc<RefCell<T>>, method: P) -> Self
    where
        T: ?Sized + 'static,
        P: MethodPtr<T, Args, R>,
    {
        Self::bind_method(receiver, method, Some(method.address()))
    }

    /// Bind a `&self` method given as a `fn` pointer. Bindings of the same
    /// pointer to the same receiver compare equal.
    #[must_use]
    pub fn from_const_method_ptr<S, T, P>(receiver: &Rc<S>, method: P) -> Self
    where
        S: Receiver<T> + ?Sized + 'static,
        T: ?Sized + 'static,
        P: ConstMethodPtr<T, Args, R>,
    {
        Self::bind_const_method(receiver, method, Some(method.address()))
    }

    fn bind(
        kind: TargetKind,
        id: TargetId,
        name: &'static str,
        target: Rc<dyn Target<Args, R>>,
    ) -> Self {
        Self {
            bound: Some(Bound {
                kind,
                id,
                name,
                target,
            }),
        }
    }

    /// Call the target with an argument tuple.
    ///
    /// # Errors
    ///
    /// See the failure modes in the module docs.
    #[inline]
    pub fn try_call(&self, args: Args) -> Result<R, DelegateError> {
        match &self.bound {
            Some(bound) => bound.target.invoke(args),
            None => Err(DelegateError::NullTarget),
        }
    }

    /// Call the target with an argument tuple.
    ///
    /// # Panics
    ///
    /// Panics if the callable is null or its receiver is unavailable. The
    /// failure is first reported as an error-class contract violation.
    #[inline]
    #[track_caller]
    pub fn call(&self, args: Args) -> R {
        match self.try_call(args) {
            Ok(value) => value,
            Err(err) => self.fail(err),
        }
    }

    #[cold]
    #[track_caller]
    fn fail(&self, err: DelegateError) -> ! {
        diagnostics::error(err.as_str(), format!("{err}: {self:?}"));
        // Lenient policy: there is still no value to return.
        panic!("{err} [{}]", err.as_str());
    }
}

macro_rules! impl_invoke {
    ($($A:ident $a:ident),*) => {
        impl<$($A,)* R> Callable<($($A,)*), R> {
            /// Call the target with positional arguments.
            ///
            /// # Panics
            ///
            /// See [`Callable::call`].
            #[inline]
            #[track_caller]
            pub fn invoke(&self $(, $a: $A)*) -> R {
                self.call(($($a,)*))
            }
        }
    };
}

all_tuples!(impl_invoke);

impl<Args, R> PartialEq for Callable<Args, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<Args, R> Eq for Callable<Args, R> {}

impl<Args, R> Hash for Callable<Args, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<Args, R> fmt::Debug for Callable<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bound {
            None => f.write_str("Callable(null)"),
            Some(bound) => f
                .debug_struct("Callable")
                .field("kind", &bound.kind.as_str())
                .field("target", &bound.name)
                .field("receiver", &bound.id.receiver)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use zb_core::ContractPolicy;
    use zb_core::contract::with_policy;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn mul(a: i32, b: i32) -> i32 {
        a * b
    }

    #[derive(Default)]
    struct Counter {
        hits: i32,
    }

    impl Counter {
        fn hit(&mut self, by: i32) -> i32 {
            self.hits += by;
            self.hits
        }

        fn hits(&self) -> i32 {
            self.hits
        }
    }

    #[test]
    fn default_is_null() {
        let c: Callable<(i32, i32), i32> = Callable::default();
        assert!(c.is_null());
        assert!(!c.is_alive());
        assert_eq!(c.kind(), TargetKind::Null);
        assert_eq!(c.target_name(), None);
        assert_eq!(c.try_call((1, 2)), Err(DelegateError::NullTarget));
    }

    #[test]
    fn null_callables_are_equal() {
        let a: Callable<()> = Callable::null();
        let b: Callable<()> = Callable::default();
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn function_round_trip() {
        let c: Callable<(i32, i32), i32> = Callable::from_fn(add);
        assert!(!c.is_null());
        assert_eq!(c.kind(), TargetKind::Function);
        assert_eq!(c.call((2, 3)), 5);
        assert_eq!(c.invoke(2, 3), 5);
        assert!(c.target_name().is_some_and(|n| n.contains("add")));
    }

    #[test]
    fn same_function_is_equal_different_is_not() {
        let a: Callable<(i32, i32), i32> = Callable::from_fn(add);
        let b: Callable<(i32, i32), i32> = Callable::from_fn(add);
        let c: Callable<(i32, i32), i32> = Callable::from_fn(mul);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn fn_pointers_compare_by_address() {
        let handlers: [fn(i32, i32) -> i32; 2] = [add, mul];
        let a: Callable<(i32, i32), i32> = Callable::from_fn_ptr(handlers[0]);
        let b: Callable<(i32, i32), i32> = Callable::from_fn_ptr(handlers[0]);
        let c: Callable<(i32, i32), i32> = Callable::from_fn_ptr(handlers[1]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.kind(), TargetKind::Function);
        assert_eq!(a.invoke(2, 3), 5);
        assert_eq!(c.invoke(2, 3), 6);

        let mut set: HashSet<Callable<(i32, i32), i32>> = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn method_pointers_compare_by_address_and_receiver() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let y = Rc::new(RefCell::new(Counter::default()));
        let hit: fn(&mut Counter, i32) -> i32 = Counter::hit;
        let hits: fn(&Counter) -> i32 = Counter::hits;

        let on_x: Callable<(i32,), i32> = Callable::from_method_ptr(&x, hit);
        assert_eq!(on_x, Callable::from_method_ptr(&x, hit));
        assert_ne!(on_x, Callable::from_method_ptr(&y, hit));
        assert_eq!(on_x.kind(), TargetKind::Method);
        assert_eq!(on_x.invoke(4), 4);

        let read: Callable<(), i32> = Callable::from_const_method_ptr(&x, hits);
        assert_eq!(read, Callable::from_const_method_ptr(&x, hits));
        assert_eq!(read.kind(), TargetKind::ConstMethod);
        assert_eq!(read.invoke(), 4);

        let plain = Rc::new(Counter { hits: 2 });
        let read_plain: Callable<(), i32> = Callable::from_const_method_ptr(&plain, hits);
        assert_eq!(read_plain.invoke(), 2);
        assert_ne!(read_plain, read);
    }

    #[test]
    fn capturing_closures_compare_by_binding() {
        let offset = 10;
        let a: Callable<(i32,), i32> = Callable::from_fn(move |x: i32| x + offset);
        let b: Callable<(i32,), i32> = Callable::from_fn(move |x: i32| x + offset);
        assert_eq!(a.invoke(1), 11);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn method_identity_includes_receiver() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let y = Rc::new(RefCell::new(Counter::default()));
        let on_x: Callable<(i32,), i32> = Callable::from_method(&x, Counter::hit);
        let on_y: Callable<(i32,), i32> = Callable::from_method(&y, Counter::hit);
        assert_ne!(on_x, on_y);
        assert_eq!(on_x, Callable::from_method(&x, Counter::hit));
        assert_eq!(on_x.kind(), TargetKind::Method);
    }

    #[test]
    fn method_and_const_method_share_receiver() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let hit: Callable<(i32,), i32> = Callable::from_method(&x, Counter::hit);
        let read: Callable<(), i32> = Callable::from_const_method(&x, Counter::hits);
        assert_eq!(hit.invoke(3), 3);
        assert_eq!(hit.invoke(4), 7);
        assert_eq!(read.invoke(), 7);
        assert_eq!(read.kind(), TargetKind::ConstMethod);
    }

    #[test]
    fn const_method_on_plain_rc() {
        let c = Rc::new(Counter { hits: 9 });
        let read: Callable<(), i32> = Callable::from_const_method(&c, Counter::hits);
        assert_eq!(read.call(()), 9);
    }

    #[test]
    fn receiver_is_not_owned() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let hit: Callable<(i32,), i32> = Callable::from_method(&x, Counter::hit);
        assert_eq!(Rc::strong_count(&x), 1);
        assert!(hit.is_alive());

        drop(x);
        assert!(!hit.is_alive());
        assert_eq!(hit.try_call((1,)), Err(DelegateError::ReceiverDropped));
    }

    #[test]
    fn reentrant_receiver_reports_borrow() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let hit: Callable<(i32,), i32> = Callable::from_method(&x, Counter::hit);
        let _held = x.borrow_mut();
        assert_eq!(hit.try_call((1,)), Err(DelegateError::ReceiverBorrowed));
    }

    #[test]
    fn reassignment_replaces_target() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let mut c: Callable<(i32,), i32> = Callable::from_method(&x, Counter::hit);
        assert_eq!(c.invoke(5), 5);

        c = Callable::from_fn(|v: i32| -v);
        assert_eq!(c.invoke(5), -5);
        assert_eq!(x.borrow().hits, 5);

        c = Callable::null();
        assert!(c.is_null());

        c = Callable::from_fn(|v: i32| v * 2);
        c.reset();
        assert!(c.is_null());
    }

    #[test]
    fn arity_is_exposed() {
        assert_eq!(Callable::<(), ()>::ARITY, 0);
        assert_eq!(Callable::<(i32, i32), i32>::ARITY, 2);
        let c: Callable<(u8, u8, u8, u8, u8, u8, u8, u8)> =
            Callable::from_fn(|_: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8| {});
        assert_eq!(c.parameter_count(), 8);
        c.invoke(1, 2, 3, 4, 5, 6, 7, 8);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let x = Rc::new(RefCell::new(Counter::default()));
        let mut set: HashSet<Callable<(i32,), i32>> = HashSet::new();
        set.insert(Callable::from_method(&x, Counter::hit));
        set.insert(Callable::from_method(&x, Counter::hit));
        set.insert(Callable::from_fn(|v: i32| v));
        set.insert(Callable::null());
        set.insert(Callable::null());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn debug_format() {
        let c: Callable<(i32, i32), i32> = Callable::from_fn(add);
        let dbg = format!("{c:?}");
        assert!(dbg.contains("Callable"));
        assert!(dbg.contains("function"));
        let null: Callable<()> = Callable::null();
        assert_eq!(format!("{null:?}"), "Callable(null)");
    }

    #[test]
    #[should_panic(expected = "callable_null_invocation")]
    fn null_call_panics_under_strict() {
        let c: Callable<(i32, i32), i32> = Callable::null();
        with_policy(ContractPolicy::Strict, || c.invoke(1, 2));
    }

    #[test]
    #[should_panic(expected = "callable_null_invocation")]
    fn null_call_panics_under_lenient() {
        let c: Callable<()> = Callable::null();
        with_policy(ContractPolicy::Lenient, || c.invoke());
    }
}
