use std::fmt;

use log::trace;

use crate::errors::Violation;
use crate::models::common::BehaviorKind;
use crate::models::slot::{ Slot, SlotState };
use crate::traits::property_behavior::PropertyBehavior;

/// Computes its value on first read and caches it.
///
/// Reads need `&mut self` because the first one fills the cache. This type
/// does no synchronization; use [`Synchronized`](super::synchronized::Synchronized)
/// when several threads may race on the first read.
pub struct Lazy<Value, F = fn() -> Value> {
    slot: Slot<Value>,
    init: F,
}

impl<Value, F> Lazy<Value, F> where F: FnMut() -> Value {
    pub fn new(init: F) -> Self {
        Self { slot: Slot::Absent, init }
    }

    /// Peek at the cache without triggering initialization
    pub fn peek(&self) -> Option<&Value> {
        self.slot.as_ref()
    }

    pub fn get(&mut self) -> &Value {
        let init = &mut self.init;
        &*self.slot.get_or_insert_with(|| {
            trace!("lazy property absent, running initializer");
            init()
        })
    }

    pub fn set(&mut self, value: Value) {
        if self.slot.replace(value).is_none() {
            trace!("lazy property assigned before first read, initializer skipped");
        }
    }
}

impl<Value, F> PropertyBehavior for Lazy<Value, F> where F: FnMut() -> Value {
    type Value = Value;

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Lazy
    }

    fn state(&self) -> SlotState {
        self.slot.state()
    }

    fn try_get(&mut self) -> Result<&Value, Violation> {
        Ok(Lazy::get(self))
    }

    fn try_set(&mut self, value: Value) -> Result<(), Violation> {
        Lazy::set(self, value);
        Ok(())
    }
}

impl<Value: fmt::Debug, F> fmt::Debug for Lazy<Value, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").field("slot", &self.slot).finish_non_exhaustive()
    }
}
