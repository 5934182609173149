//! Relay slot abstraction
//!
//! One value under one key, overwritten on every write. Readers see either the
//! previous complete value or the new one.

use std::cell::RefCell;
use std::rc::Rc;
use super::error::RelayError;

/// Single-slot, last-write-wins string storage
pub trait SignalStore {
    /// Current raw value, `None` if nothing has been written
    fn load(&self) -> Result<Option<String>, RelayError>;

    /// Replace the slot contents
    fn store(&self, value: &str) -> Result<(), RelayError>;
}

/// In-process slot. Clones share the same slot, standing in for separate
/// browser contexts reading one localStorage key.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

impl SignalStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, RelayError> {
        Ok(self.slot.borrow().clone())
    }

    fn store(&self, value: &str) -> Result<(), RelayError> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

impl<S: SignalStore + ?Sized> SignalStore for &S {
    fn load(&self) -> Result<Option<String>, RelayError> {
        (**self).load()
    }

    fn store(&self, value: &str) -> Result<(), RelayError> {
        (**self).store(value)
    }
}
