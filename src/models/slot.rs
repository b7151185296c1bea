use serde::{ Deserialize, Serialize };

/// Backing storage of a property: absent for a while, then present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<Value> {
    Absent,
    Present(Value),
}

/// Data-less view of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Absent,
    Present,
}

impl<Value> Default for Slot<Value> {
    fn default() -> Self {
        Slot::Absent
    }
}

impl<Value> Slot<Value> {
    pub fn state(&self) -> SlotState {
        match self {
            Slot::Absent => SlotState::Absent,
            Slot::Present(_) => SlotState::Present,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn as_ref(&self) -> Option<&Value> {
        match self {
            Slot::Absent => None,
            Slot::Present(value) => Some(value),
        }
    }

    /// Store `value`, returning whatever was there before.
    pub fn replace(&mut self, value: Value) -> Option<Value> {
        match std::mem::replace(self, Slot::Present(value)) {
            Slot::Absent => None,
            Slot::Present(old) => Some(old),
        }
    }

    /// Return the stored value, filling the slot with `init()` first if absent.
    pub fn get_or_insert_with<F: FnOnce() -> Value>(&mut self, init: F) -> &mut Value {
        if let Slot::Absent = self {
            *self = Slot::Present(init());
        }
        match self {
            Slot::Present(value) => value,
            Slot::Absent => unreachable!("slot was filled above"),
        }
    }
}

impl<Value> From<Option<Value>> for Slot<Value> {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Slot::Present(value),
            None => Slot::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let slot: Slot<u32> = Slot::default();
        assert_eq!(slot.state(), SlotState::Absent);
        assert_eq!(slot.as_ref(), None);
    }

    #[test]
    fn get_or_insert_with_only_fills_once() {
        let mut slot = Slot::Absent;
        let mut calls = 0;
        *slot.get_or_insert_with(|| {
            calls += 1;
            1
        }) += 10;
        let value = *slot.get_or_insert_with(|| {
            calls += 1;
            99
        });
        assert_eq!(value, 11);
        assert_eq!(calls, 1);
    }

    #[test]
    fn replace_returns_previous() {
        let mut slot = Slot::from(Some("a"));
        assert_eq!(slot.replace("b"), Some("a"));
        assert_eq!(slot.as_ref(), Some(&"b"));
        assert!(slot.is_present());
    }
}
