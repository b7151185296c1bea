use crate::errors::Violation;
use crate::models::common::BehaviorKind;
use crate::models::slot::SlotState;

/// A reusable storage, initialization and access strategy for one field.
///
/// Structs hold an implementor of this trait in place of a raw field. The
/// fallible `try_*` methods report contract violations as values; `get` and
/// `set` treat them as programmer errors and panic.
pub trait PropertyBehavior {
    type Value;

    /// Which behavior this is
    fn kind(&self) -> BehaviorKind;

    /// Whether the backing slot currently holds a value
    fn state(&self) -> SlotState;

    /// Read the value, reporting a violation instead of panicking
    fn try_get(&mut self) -> Result<&Self::Value, Violation>;

    /// Write the value, reporting a violation instead of panicking
    fn try_set(&mut self, value: Self::Value) -> Result<(), Violation>;

    /// Read the value. Panics on a contract violation.
    fn get(&mut self) -> &Self::Value {
        let kind = self.kind();
        match self.try_get() {
            Ok(value) => value,
            Err(violation) => panic!("Precondition violation: {} property {}", kind, violation),
        }
    }

    /// Write the value. Panics on a contract violation.
    fn set(&mut self, value: Self::Value) {
        if let Err(violation) = self.try_set(value) {
            panic!("Precondition violation: {} property {}", self.kind(), violation);
        }
    }
}
