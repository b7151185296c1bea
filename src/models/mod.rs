pub mod common;
pub mod slot;
pub mod property;

// Re-export common model types
pub use common::BehaviorKind;
pub use slot::{Slot, SlotState};
pub use property::BoundProperty;
