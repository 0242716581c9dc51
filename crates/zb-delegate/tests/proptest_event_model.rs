//! Property-based tests for callable equality and event bookkeeping.
//!
//! **Event vs. model:**
//! 1. After any sequence of subscribe/unsubscribe/try_* operations the
//!    subscriber list equals a plain `Vec` model driven by the same rules.
//! 2. A raise calls exactly the modeled subscribers, in model order.
//! 3. `try_subscribe` never creates duplicates; `subscribe` may.
//!
//! **Callable equality:**
//! 4. Method callables are equal iff bound to the same receiver.
//! 5. Equal callables hash equally.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use proptest::prelude::*;
use zb_core::ContractPolicy;
use zb_core::contract::with_policy;
use zb_delegate::{Callable, EventError, MulticastEvent};

const POOL: usize = 6;

#[derive(Debug, Clone)]
enum Op {
    Subscribe(usize),
    TrySubscribe(usize),
    Unsubscribe(usize),
    TryUnsubscribe(usize),
    UnsubscribeAll,
    Raise,
}

// ── Strategies ────────────────────────────────────────────────────────────

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..POOL).prop_map(Op::Subscribe),
        2 => (0..POOL).prop_map(Op::TrySubscribe),
        3 => (0..POOL).prop_map(Op::Unsubscribe),
        2 => (0..POOL).prop_map(Op::TryUnsubscribe),
        1 => Just(Op::UnsubscribeAll),
        2 => Just(Op::Raise),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 0..64)
}

// ── Helpers ───────────────────────────────────────────────────────────────

type Log = Rc<RefCell<Vec<usize>>>;

fn pool(log: &Log) -> Vec<Callable<()>> {
    (0..POOL)
        .map(|id| {
            let log = Rc::clone(log);
            Callable::from_fn(move || log.borrow_mut().push(id))
        })
        .collect()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

struct Node {
    hits: u32,
}

impl Node {
    fn hit(&mut self) {
        self.hits += 1;
    }
}

proptest! {
    #[test]
    fn event_tracks_vec_model(ops in ops_strategy()) {
        let log = Log::default();
        let callables = pool(&log);
        let ev: MulticastEvent<()> = MulticastEvent::new();
        let mut model: Vec<usize> = Vec::new();

        with_policy(ContractPolicy::Lenient, || -> Result<(), TestCaseError> {
            for op in &ops {
                match *op {
                    Op::Subscribe(i) => {
                        ev.subscribe(callables[i].clone());
                        model.push(i);
                    }
                    Op::TrySubscribe(i) => {
                        let result = ev.try_subscribe(callables[i].clone());
                        if model.contains(&i) {
                            prop_assert_eq!(result, Err(EventError::AlreadySubscribed));
                        } else {
                            prop_assert_eq!(result, Ok(()));
                            model.push(i);
                        }
                    }
                    Op::Unsubscribe(i) => {
                        ev.unsubscribe(&callables[i]);
                        if let Some(pos) = model.iter().position(|&m| m == i) {
                            model.remove(pos);
                        }
                    }
                    Op::TryUnsubscribe(i) => {
                        let result = ev.try_unsubscribe(&callables[i]);
                        match model.iter().position(|&m| m == i) {
                            Some(pos) => {
                                prop_assert_eq!(result, Ok(()));
                                model.remove(pos);
                            }
                            None => prop_assert_eq!(result, Err(EventError::NotSubscribed)),
                        }
                    }
                    Op::UnsubscribeAll => {
                        ev.unsubscribe_all();
                        model.clear();
                    }
                    Op::Raise => {
                        log.borrow_mut().clear();
                        ev.raise(());
                        prop_assert_eq!(&*log.borrow(), &model);
                    }
                }

                let expected: Vec<Callable<()>> =
                    model.iter().map(|&i| callables[i].clone()).collect();
                prop_assert_eq!(ev.subscribers(), expected);
                prop_assert_eq!(ev.subscriber_count(), model.len());
            }
            Ok(())
        })?;
    }

    #[test]
    fn method_equality_follows_receiver(a in 0..POOL, b in 0..POOL) {
        let nodes: Vec<Rc<RefCell<Node>>> =
            (0..POOL).map(|_| Rc::new(RefCell::new(Node { hits: 0 }))).collect();
        let ca: Callable<()> = Callable::from_method(&nodes[a], Node::hit);
        let cb: Callable<()> = Callable::from_method(&nodes[b], Node::hit);

        prop_assert_eq!(ca == cb, a == b);
        if ca == cb {
            prop_assert_eq!(hash_of(&ca), hash_of(&cb));
        }

        ca.invoke();
        prop_assert_eq!(nodes[a].borrow().hits, 1);
    }

    #[test]
    fn clones_are_equal_and_hash_alike(n in 0..POOL) {
        let log = Log::default();
        let callables = pool(&log);
        let original = &callables[n];
        let copy = original.clone();

        prop_assert_eq!(original, &copy);
        prop_assert_eq!(hash_of(original), hash_of(&copy));
        for (i, other) in callables.iter().enumerate() {
            prop_assert_eq!(other == original, i == n);
        }
    }
}
