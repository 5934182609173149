//! Producer side - republish every classification into the relay slot

use super::error::RelayError;
use super::message::RelayMessage;
use super::store::SignalStore;
use crate::gesture::GestureState;

/// Writes the latest gesture state, overwriting whatever was there
pub struct SignalPublisher<S: SignalStore> {
    store: S,
    writes: u64,
}

impl<S: SignalStore> SignalPublisher<S> {
    pub fn new(store: S) -> Self {
        Self { store, writes: 0 }
    }

    /// Serialize `state` stamped with `now_ms` and store it.
    /// No queueing: the slot only ever holds the newest message.
    pub fn publish(&mut self, state: GestureState, now_ms: f64) -> Result<RelayMessage, RelayError> {
        let message = RelayMessage::new(state, now_ms as i64);
        let json = message.to_json()?;
        self.store.store(&json)?;
        self.writes += 1;
        Ok(message)
    }

    /// Successful writes since construction
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MemoryStore;

    #[test]
    fn test_last_write_wins() {
        let slot = MemoryStore::new();
        let mut publisher = SignalPublisher::new(slot.clone());

        publisher.publish(GestureState::new(true, false), 1000.0).unwrap();
        publisher.publish(GestureState::new(false, true), 1033.0).unwrap();

        let raw = slot.load().unwrap().unwrap();
        let msg = RelayMessage::from_json(&raw).unwrap();
        assert_eq!(msg.state(), GestureState::new(false, true));
        assert_eq!(msg.timestamp, Some(1033));
        assert_eq!(publisher.writes(), 2);
    }

    struct BrokenStore;

    impl SignalStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, RelayError> {
            Err(RelayError::Unavailable)
        }

        fn store(&self, _value: &str) -> Result<(), RelayError> {
            Err(RelayError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_store_failure_reported() {
        let mut publisher = SignalPublisher::new(BrokenStore);
        let result = publisher.publish(GestureState::default(), 0.0);
        assert!(matches!(result, Err(RelayError::Storage(_))));
        assert_eq!(publisher.writes(), 0);
    }
}
