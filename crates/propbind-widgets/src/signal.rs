#![forbid(unsafe_code)]

//! Synchronous, single-threaded notification primitive.
//!
//! A [`Signal<T>`] holds weakly-referenced slots. [`Signal::connect`] returns
//! a [`Subscription`] that keeps the slot alive; dropping it disconnects.
//!
//! # Invariants
//!
//! 1. Slots run in connection order, synchronously, on the emitting thread.
//! 2. Dead slots are pruned lazily on the next `emit()` or `slot_count()`.
//! 3. The slot list is snapshotted before dispatch, so a slot may re-enter
//!    the emitting widget (read it, write it, connect new slots) without a
//!    `RefCell` borrow conflict. Slots connected during dispatch run from
//!    the next emission on.
//!
//! # Failure Modes
//!
//! - Slot panic: propagates to the caller of `emit()`.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot<T> = dyn Fn(&T);

/// A list of callbacks notified with a `&T` payload.
pub struct Signal<T> {
    slots: RefCell<Vec<Weak<Slot<T>>>>,
}

impl<T: 'static> Signal<T> {
    /// Create a signal with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Connect a slot. It stays connected while the returned guard lives.
    #[must_use = "dropping the subscription disconnects the slot"]
    pub fn connect(&self, slot: impl Fn(&T) + 'static) -> Subscription {
        let slot: Rc<Slot<T>> = Rc::new(slot);
        self.slots.borrow_mut().push(Rc::downgrade(&slot));
        Subscription {
            _slot: Box::new(slot),
        }
    }

    /// Notify every live slot.
    pub fn emit(&self, value: &T) {
        let live: Vec<Rc<Slot<T>>> = {
            let mut slots = self.slots.borrow_mut();
            slots.retain(|slot| slot.strong_count() > 0);
            slots.iter().filter_map(Weak::upgrade).collect()
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(slots = live.len(), "signal emitted");

        for slot in live {
            slot(value);
        }
    }

    /// Number of connected, live slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        let mut slots = self.slots.borrow_mut();
        slots.retain(|slot| slot.strong_count() > 0);
        slots.len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.borrow().len())
            .finish()
    }
}

/// RAII guard for a connected slot.
#[must_use = "dropping the subscription disconnects the slot"]
pub struct Subscription {
    _slot: Box<dyn Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}
