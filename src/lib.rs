pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;

// Re-export core components
pub use config::{ ConfigError, PlaygroundConfig };
pub use errors::{ BehaviorError, BehaviorResult, ErrorSeverity, RecoverableError, Violation };
pub use implementations::{ AssignOnce, Lazy, Observed, Synchronized };
pub use models::{
    common::BehaviorKind,
    property::BoundProperty,
    slot::{ Slot, SlotState },
};
pub use traits::PropertyBehavior;
