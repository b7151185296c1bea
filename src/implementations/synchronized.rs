use std::cell::RefCell;
use std::fmt;

use log::{ debug, trace };
use parking_lot::ReentrantMutex;

use crate::errors::Violation;
use crate::models::common::BehaviorKind;
use crate::models::slot::{ Slot, SlotState };
use crate::traits::property_behavior::PropertyBehavior;

const REENTRANT_ACCESS: &str =
    "synchronized property accessed re-entrantly while it was being initialized or written";

/// Lazy initialization behind a mutex.
///
/// The absent-to-present transition and the initializer both run under the
/// lock, so concurrent first reads block until the value exists and the
/// initializer runs once. `parking_lot` guards are released on unwind and
/// never poison: if the initializer panics the slot stays absent and the
/// next read tries again.
///
/// The lock is reentrant so the owning thread never deadlocks on itself.
/// Reading the property from inside a `with` closure is allowed. Reading it
/// from its own initializer, or writing it from inside `with`, panics.
pub struct Synchronized<Value, F = fn() -> Value> {
    slot: ReentrantMutex<RefCell<Slot<Value>>>,
    init: F,
}

impl<Value, F> Synchronized<Value, F> where F: Fn() -> Value {
    pub fn new(init: F) -> Self {
        Self { slot: ReentrantMutex::new(RefCell::new(Slot::Absent)), init }
    }

    /// Run `f` against the value, initializing it first if needed.
    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        let guard = self.slot.lock();
        let present = match guard.try_borrow() {
            Ok(slot) => slot.is_present(),
            Err(_) => panic!("{}", REENTRANT_ACCESS),
        };
        if !present {
            let mut slot = guard.try_borrow_mut().unwrap_or_else(|_| panic!("{}", REENTRANT_ACCESS));
            slot.get_or_insert_with(|| {
                debug!("synchronized property absent, running initializer under lock");
                (self.init)()
            });
        }
        let slot = guard.borrow();
        let result = match slot.as_ref() {
            Some(value) => f(value),
            None => unreachable!("slot was filled above"),
        };
        result
    }

    pub fn get(&self) -> Value where Value: Clone {
        self.with(Value::clone)
    }

    pub fn set(&self, value: Value) {
        trace!("synchronized property assigned");
        let guard = self.slot.lock();
        let mut slot = guard.try_borrow_mut().unwrap_or_else(|_| panic!("{}", REENTRANT_ACCESS));
        slot.replace(value);
    }

    /// Current slot state. Reports `Absent` while the initializer is running.
    pub fn state(&self) -> SlotState {
        let guard = self.slot.lock();
        let state = guard.try_borrow().map_or(SlotState::Absent, |slot| slot.state());
        state
    }
}

impl<Value, F> PropertyBehavior for Synchronized<Value, F> where F: Fn() -> Value {
    type Value = Value;

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Synchronized
    }

    fn state(&self) -> SlotState {
        Synchronized::state(self)
    }

    // Exclusive access already rules out a race, so skip the lock.
    fn try_get(&mut self) -> Result<&Value, Violation> {
        let init = &self.init;
        Ok(&*self.slot.get_mut().get_mut().get_or_insert_with(|| init()))
    }

    fn try_set(&mut self, value: Value) -> Result<(), Violation> {
        self.slot.get_mut().get_mut().replace(value);
        Ok(())
    }
}

impl<Value: fmt::Debug, F> fmt::Debug for Synchronized<Value, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronized").field("slot", &self.slot).finish_non_exhaustive()
    }
}
