#![forbid(unsafe_code)]

//! Signatures as argument tuples.
//!
//! A signature `R(A, B)` is spelled `Callable<(A, B), R>`. Everything that
//! depends on the parameter count is generated once per tuple arity, so
//! arity 0 behaves exactly like arity 12.
//!
//! The binding traits are blanket-implemented for plain `Fn` types:
//!
//! | Trait | Implemented for |
//! |-------|-----------------|
//! | [`Function`]`<(A, B), R>` | `Fn(A, B) -> R` |
//! | [`Method`]`<T, (A, B), R>` | `Fn(&mut T, A, B) -> R` |
//! | [`ConstMethod`]`<T, (A, B), R>` | `Fn(&T, A, B) -> R` |
//!
//! Because each `Fn` type has exactly one arity, the argument tuple is
//! inferred from the function that gets bound.
//!
//! [`FnPtr`], [`MethodPtr`] and [`ConstMethodPtr`] mark the matching `fn`
//! pointer types (`fn(A, B) -> R`, `fn(&mut T, A, B) -> R`, `fn(&T, A, B) -> R`)
//! and expose the pointer address, which callables use as identity.

mod sealed {
    pub trait Sealed {}
}

/// An argument tuple usable as a signature.
///
/// Implemented for `()` and tuples of up to twelve elements.
pub trait ArgList: sealed::Sealed {
    /// Number of parameters in the signature.
    const ARITY: usize;
}

/// A free function, associated function, or closure callable with `Args`.
pub trait Function<Args, R>: 'static {
    fn call_with(&self, args: Args) -> R;
}

/// A function taking a mutable receiver first, such as `T::method` for
/// `fn method(&mut self, ..)`.
pub trait Method<T: ?Sized, Args, R>: 'static {
    fn call_with(&self, receiver: &mut T, args: Args) -> R;
}

/// A function taking a shared receiver first, such as `T::method` for
/// `fn method(&self, ..)` or `<dyn Trait>::method`.
pub trait ConstMethod<T: ?Sized, Args, R>: 'static {
    fn call_with(&self, receiver: &T, args: Args) -> R;
}

/// A `fn` pointer bindable as a [`Function`].
pub trait FnPtr<Args, R>: Function<Args, R> + Copy {
    fn address(self) -> usize;
}

/// A `fn` pointer bindable as a [`Method`].
pub trait MethodPtr<T: ?Sized, Args, R>: Method<T, Args, R> + Copy {
    fn address(self) -> usize;
}

/// A `fn` pointer bindable as a [`ConstMethod`].
pub trait ConstMethodPtr<T: ?Sized, Args, R>: ConstMethod<T, Args, R> + Copy {
    fn address(self) -> usize;
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_signature {
    ($($A:ident $a:ident),*) => {
        impl<$($A),*> sealed::Sealed for ($($A,)*) {}

        impl<$($A),*> ArgList for ($($A,)*) {
            const ARITY: usize = count!($($A)*);
        }

        impl<F, $($A,)* R> Function<($($A,)*), R> for F
        where
            F: Fn($($A),*) -> R + 'static,
        {
            #[inline]
            fn call_with(&self, ($($a,)*): ($($A,)*)) -> R {
                (self)($($a),*)
            }
        }

        impl<F, T: ?Sized, $($A,)* R> Method<T, ($($A,)*), R> for F
        where
            F: Fn(&mut T, $($A),*) -> R + 'static,
        {
            #[inline]
            fn call_with(&self, receiver: &mut T, ($($a,)*): ($($A,)*)) -> R {
                (self)(receiver, $($a),*)
            }
        }

        impl<F, T: ?Sized, $($A,)* R> ConstMethod<T, ($($A,)*), R> for F
        where
            F: Fn(&T, $($A),*) -> R + 'static,
        {
            #[inline]
            fn call_with(&self, receiver: &T, ($($a,)*): ($($A,)*)) -> R {
                (self)(receiver, $($a),*)
            }
        }

        impl<$($A: 'static,)* R: 'static> FnPtr<($($A,)*), R> for fn($($A),*) -> R {
            #[inline]
            fn address(self) -> usize {
                self as usize
            }
        }

        impl<T: ?Sized + 'static, $($A: 'static,)* R: 'static> MethodPtr<T, ($($A,)*), R>
            for fn(&mut T $(, $A)*) -> R
        {
            #[inline]
            fn address(self) -> usize {
                self as usize
            }
        }

        impl<T: ?Sized + 'static, $($A: 'static,)* R: 'static> ConstMethodPtr<T, ($($A,)*), R>
            for fn(&T $(, $A)*) -> R
        {
            #[inline]
            fn address(self) -> usize {
                self as usize
            }
        }
    };
}

all_tuples!(impl_signature);
