#![forbid(unsafe_code)]

//! Contract policy: what happens when an error-class violation is reported.
//!
//! The build picks a default with [`ContractPolicy::build_default`]:
//! debug builds (or builds with the `contract-checks` feature) are
//! [`Strict`](ContractPolicy::Strict), release builds are
//! [`Lenient`](ContractPolicy::Lenient).
//!
//! Tests that need the other tier push a thread-local override:
//!
//! - **Thread-local**: overrides on one thread never affect another, so
//!   parallel test runs stay isolated.
//! - **Stackable**: the innermost override wins; dropping its guard restores
//!   the previous policy.
//! - **RAII-based**: guards pop on drop, including during unwinding.
//!
//! # Example
//!
//! ```
//! use zb_core::contract::{with_policy, ContractPolicy};
//!
//! with_policy(ContractPolicy::Lenient, || {
//!     assert_eq!(ContractPolicy::current(), ContractPolicy::Lenient);
//! });
//! ```

use std::cell::RefCell;

/// How error-class contract violations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractPolicy {
    /// Log the violation, then panic with its description.
    Strict,
    /// Log the violation and let the caller reject the operation.
    Lenient,
}

impl ContractPolicy {
    /// Policy chosen at build time.
    #[must_use]
    pub const fn build_default() -> Self {
        if cfg!(any(debug_assertions, feature = "contract-checks")) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    /// Effective policy on this thread: the innermost override, else the
    /// build default.
    #[must_use]
    pub fn current() -> Self {
        OVERRIDE_STACK.with(|stack| {
            stack
                .borrow()
                .last()
                .copied()
                .unwrap_or_else(Self::build_default)
        })
    }

    /// Whether error-class violations panic under this policy.
    #[inline]
    #[must_use]
    pub const fn panics(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl Default for ContractPolicy {
    fn default() -> Self {
        Self::build_default()
    }
}

// ============================================================================
// Thread-Local Override Stack
// ============================================================================

thread_local! {
    static OVERRIDE_STACK: RefCell<Vec<ContractPolicy>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard that removes a policy override when dropped.
#[must_use]
pub struct PolicyGuard {
    // Thread-local data: keep the guard on its thread.
    _marker: std::marker::PhantomData<*const ()>,
}

impl std::fmt::Debug for PolicyGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyGuard").finish_non_exhaustive()
    }
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        OVERRIDE_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Push a policy override for the current thread.
#[must_use = "the override is removed when the guard is dropped"]
pub fn push_override(policy: ContractPolicy) -> PolicyGuard {
    OVERRIDE_STACK.with(|stack| {
        stack.borrow_mut().push(policy);
    });
    PolicyGuard {
        _marker: std::marker::PhantomData,
    }
}

/// Run `f` with `policy` in effect on this thread.
pub fn with_policy<F, R>(policy: ContractPolicy, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = push_override(policy);
    f()
}

/// Number of active overrides on this thread.
#[must_use]
pub fn override_depth() -> usize {
    OVERRIDE_STACK.with(|stack| stack.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_default_follows_debug_assertions() {
        if cfg!(debug_assertions) {
            assert_eq!(ContractPolicy::build_default(), ContractPolicy::Strict);
        }
        assert_eq!(override_depth(), 0);
        assert_eq!(ContractPolicy::current(), ContractPolicy::build_default());
        assert_eq!(ContractPolicy::default(), ContractPolicy::build_default());
    }

    #[test]
    fn push_pop_override() {
        {
            let _guard = push_override(ContractPolicy::Lenient);
            assert_eq!(override_depth(), 1);
            assert_eq!(ContractPolicy::current(), ContractPolicy::Lenient);
        }
        assert_eq!(override_depth(), 0);
    }

    #[test]
    fn innermost_override_wins() {
        with_policy(ContractPolicy::Lenient, || {
            with_policy(ContractPolicy::Strict, || {
                assert_eq!(ContractPolicy::current(), ContractPolicy::Strict);
                assert_eq!(override_depth(), 2);
            });
            assert_eq!(ContractPolicy::current(), ContractPolicy::Lenient);
        });
        assert_eq!(override_depth(), 0);
    }

    #[test]
    fn override_is_thread_local() {
        let _guard = push_override(ContractPolicy::Lenient);
        let other = std::thread::spawn(|| (override_depth(), ContractPolicy::current()))
            .join()
            .expect("thread panicked");
        assert_eq!(other.0, 0);
        assert_eq!(other.1, ContractPolicy::build_default());
    }

    #[test]
    fn with_policy_cleans_up_on_panic() {
        let result = std::panic::catch_unwind(|| {
            with_policy(ContractPolicy::Lenient, || {
                assert_eq!(override_depth(), 1);
                panic!("deliberate panic");
            });
        });
        assert!(result.is_err());
        assert_eq!(override_depth(), 0);
    }

    #[test]
    fn policy_labels() {
        assert!(ContractPolicy::Strict.panics());
        assert!(!ContractPolicy::Lenient.panics());
        assert_eq!(ContractPolicy::Strict.as_str(), "strict");
        assert_eq!(ContractPolicy::Lenient.as_str(), "lenient");
    }
}
