use log::{ trace, warn };

use crate::errors::Violation;
use crate::models::common::BehaviorKind;
use crate::models::slot::{ Slot, SlotState };
use crate::traits::property_behavior::PropertyBehavior;

/// A field populated after construction that reads like an immutable value.
///
/// The slot may be filled exactly once. Reading it first, or filling it
/// again, is a precondition violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOnce<Value> {
    slot: Slot<Value>,
}

impl<Value> Default for AssignOnce<Value> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Value> AssignOnce<Value> {
    pub fn new() -> Self {
        Self { slot: Slot::Absent }
    }

    pub fn is_assigned(&self) -> bool {
        self.slot.is_present()
    }

    /// Read without needing exclusive access
    pub fn try_read(&self) -> Result<&Value, Violation> {
        self.slot.as_ref().ok_or_else(|| {
            warn!("assign-once property read before it was assigned");
            Violation::ReadBeforeAssign
        })
    }

    /// Read the value. Panics if it has not been assigned yet.
    pub fn read(&self) -> &Value {
        match self.try_read() {
            Ok(value) => value,
            Err(violation) => {
                panic!("Precondition violation: {} property {}", BehaviorKind::AssignOnce, violation)
            }
        }
    }

    pub fn try_assign(&mut self, value: Value) -> Result<(), Violation> {
        if self.slot.is_present() {
            warn!("assign-once property assigned more than once, keeping the first value");
            return Err(Violation::AssignedTwice);
        }
        trace!("assign-once property assigned");
        self.slot = Slot::Present(value);
        Ok(())
    }

    pub fn into_inner(self) -> Option<Value> {
        match self.slot {
            Slot::Absent => None,
            Slot::Present(value) => Some(value),
        }
    }
}

impl<Value> PropertyBehavior for AssignOnce<Value> {
    type Value = Value;

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::AssignOnce
    }

    fn state(&self) -> SlotState {
        self.slot.state()
    }

    fn try_get(&mut self) -> Result<&Value, Violation> {
        self.try_read()
    }

    fn try_set(&mut self, value: Value) -> Result<(), Violation> {
        self.try_assign(value)
    }
}
