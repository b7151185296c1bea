use log::error;

use crate::errors::{ BehaviorError, BehaviorResult };
use crate::models::common::BehaviorKind;
use crate::models::slot::SlotState;
use crate::traits::property_behavior::PropertyBehavior;

/// A behavior attached to one named field of one instance.
///
/// The binding owns its behavior, so the backing slot is never shared
/// between instances. Violations are reported with the field name.
#[derive(Debug, Clone)]
pub struct BoundProperty<B> {
    name: &'static str,
    behavior: B,
}

impl<B: PropertyBehavior> BoundProperty<B> {
    pub fn new(name: &'static str, behavior: B) -> Self {
        Self { name, behavior }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> BehaviorKind {
        self.behavior.kind()
    }

    pub fn state(&self) -> SlotState {
        self.behavior.state()
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn into_inner(self) -> B {
        self.behavior
    }

    pub fn try_get(&mut self) -> BehaviorResult<&B::Value> {
        let name = self.name;
        self.behavior.try_get().map_err(|violation| BehaviorError::PreconditionViolation {
            property: name.to_string(),
            violation,
        })
    }

    pub fn try_set(&mut self, value: B::Value) -> BehaviorResult<()> {
        let name = self.name;
        self.behavior.try_set(value).map_err(|violation| BehaviorError::PreconditionViolation {
            property: name.to_string(),
            violation,
        })
    }

    /// Read the field. Panics on a contract violation.
    pub fn get(&mut self) -> &B::Value {
        match self.try_get() {
            Ok(value) => value,
            Err(e) => {
                error!("{}", e);
                panic!("{}", e)
            }
        }
    }

    /// Write the field. Panics on a contract violation.
    pub fn set(&mut self, value: B::Value) {
        if let Err(e) = self.try_set(value) {
            error!("{}", e);
            panic!("{}", e);
        }
    }
}
