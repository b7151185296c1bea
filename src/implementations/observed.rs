use std::fmt;

use log::trace;

use crate::errors::Violation;
use crate::models::common::BehaviorKind;
use crate::models::slot::SlotState;
use crate::traits::property_behavior::PropertyBehavior;

type Observer<'a, Value> = Box<dyn FnMut(&Value, &Value) + 'a>;

/// A stored value with observers around every write.
///
/// `will_set` receives `(current, new)` before the write and `did_set`
/// receives `(old, current)` after it.
pub struct Observed<'a, Value> {
    value: Value,
    will_set: Option<Observer<'a, Value>>,
    did_set: Option<Observer<'a, Value>>,
}

impl<'a, Value> Observed<'a, Value> {
    pub fn new(value: Value) -> Self {
        Self { value, will_set: None, did_set: None }
    }

    pub fn will_set(mut self, observer: impl FnMut(&Value, &Value) + 'a) -> Self {
        self.will_set = Some(Box::new(observer));
        self
    }

    pub fn did_set(mut self, observer: impl FnMut(&Value, &Value) + 'a) -> Self {
        self.did_set = Some(Box::new(observer));
        self
    }

    pub fn get(&self) -> &Value {
        &self.value
    }

    pub fn set(&mut self, value: Value) {
        if let Some(observer) = self.will_set.as_mut() {
            trace!("running will-set observer");
            observer(&self.value, &value);
        }
        let old = std::mem::replace(&mut self.value, value);
        if let Some(observer) = self.did_set.as_mut() {
            trace!("running did-set observer");
            observer(&old, &self.value);
        }
    }

    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl<'a, Value> PropertyBehavior for Observed<'a, Value> {
    type Value = Value;

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Observed
    }

    fn state(&self) -> SlotState {
        SlotState::Present
    }

    fn try_get(&mut self) -> Result<&Value, Violation> {
        Ok(&self.value)
    }

    fn try_set(&mut self, value: Value) -> Result<(), Violation> {
        Observed::set(self, value);
        Ok(())
    }
}

impl<Value: fmt::Debug> fmt::Debug for Observed<'_, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("will_set", &self.will_set.is_some())
            .field("did_set", &self.did_set.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn set_without_observers() {
        let mut value = Observed::new(1);
        value.set(2);
        assert_eq!(*value.get(), 2);
        assert_eq!(value.state(), SlotState::Present);
    }

    #[test]
    fn did_set_sees_old_value() {
        let history = RefCell::new(Vec::new());
        let mut name = Observed::new("a".to_string())
            .did_set(|old: &String, new: &String| history.borrow_mut().push(format!("{}->{}", old, new)));
        name.set("b".to_string());
        name.set("c".to_string());
        drop(name);
        assert_eq!(history.into_inner(), vec!["a->b", "b->c"]);
    }
}
