//! Consumer side - poll the relay slot and apply the staleness rule
//!
//! A consumer never trusts a message older than the staleness window. When the
//! producer goes quiet the monitor reports disconnected but keeps showing the
//! last good gesture state.

use chrono::{Local, TimeZone};
use serde::Serialize;
use super::message::{is_fresh, RelayMessage};
use super::store::SignalStore;
use crate::config::STALENESS_MS;
use crate::gesture::GestureState;

/// Why no usable signal was found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisconnectReason {
    /// Nothing has ever been written
    Empty,
    /// Stored value did not parse as a relay message
    Malformed,
    /// Storage could not be read in this context
    Unavailable,
}

/// Outcome of a single poll
#[derive(Clone, Debug, PartialEq)]
pub enum RelayStatus {
    Connected { state: GestureState, timestamp: i64 },
    Stale { age_ms: f64 },
    Disconnected { reason: DisconnectReason },
}

impl RelayStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, RelayStatus::Connected { .. })
    }
}

/// What a consumer view shows, serialized for the JS UI
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    pub connected: bool,
    pub left_arm_raised: bool,
    pub right_arm_raised: bool,
    pub last_update: Option<String>,
}

/// Per-consumer view of the relay
pub struct SignalMonitor {
    staleness_ms: f64,
    displayed: GestureState,
    connected: bool,
    last_update: Option<String>,
}

impl SignalMonitor {
    pub fn new(staleness_ms: f64) -> Self {
        Self {
            staleness_ms,
            displayed: GestureState::default(),
            connected: false,
            last_update: None,
        }
    }

    /// Read the slot once. Never fails: every problem becomes a
    /// disconnected status.
    pub fn poll<S: SignalStore>(&mut self, store: &S, now_ms: f64) -> RelayStatus {
        let status = self.evaluate(store, now_ms);

        match &status {
            RelayStatus::Connected { state, timestamp } => {
                self.displayed = *state;
                self.connected = true;
                self.last_update = format_local_time(*timestamp);
            }
            _ => {
                // Displayed state keeps the last good value
                self.connected = false;
            }
        }

        status
    }

    fn evaluate<S: SignalStore>(&self, store: &S, now_ms: f64) -> RelayStatus {
        let raw = match store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return RelayStatus::Disconnected { reason: DisconnectReason::Empty };
            }
            Err(err) => {
                log::warn!("Error reading pose data: {}", err);
                return RelayStatus::Disconnected { reason: DisconnectReason::Unavailable };
            }
        };

        let message = match RelayMessage::from_json(&raw) {
            Ok(m) => m,
            Err(err) => {
                log::warn!("Error parsing pose data: {}", err);
                return RelayStatus::Disconnected { reason: DisconnectReason::Malformed };
            }
        };

        match message.timestamp {
            Some(timestamp) if is_fresh(&message, now_ms, self.staleness_ms) => {
                RelayStatus::Connected { state: message.state(), timestamp }
            }
            _ => RelayStatus::Stale { age_ms: message.age_ms(now_ms) },
        }
    }

    pub fn set_staleness_ms(&mut self, staleness_ms: f64) {
        self.staleness_ms = staleness_ms;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Last gesture state accepted from a fresh message
    pub fn displayed(&self) -> GestureState {
        self.displayed
    }

    /// Local `HH:MM:SS` of the last accepted message
    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            connected: self.connected,
            left_arm_raised: self.displayed.left_arm_raised,
            right_arm_raised: self.displayed.right_arm_raised,
            last_update: self.last_update.clone(),
        }
    }
}

impl Default for SignalMonitor {
    fn default() -> Self {
        Self::new(STALENESS_MS)
    }
}

fn format_local_time(timestamp_ms: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{MemoryStore, RelayError, SignalPublisher};

    const T: f64 = 1_700_000_000_000.0;

    #[test]
    fn test_fresh_message_connects() {
        let slot = MemoryStore::new();
        SignalPublisher::new(slot.clone())
            .publish(GestureState::new(true, false), T)
            .unwrap();

        let mut monitor = SignalMonitor::default();
        let status = monitor.poll(&slot, T + 500.0);

        assert!(status.is_connected());
        assert!(monitor.is_connected());
        assert_eq!(monitor.displayed(), GestureState::new(true, false));
        assert!(monitor.last_update().is_some());
    }

    #[test]
    fn test_stale_message_keeps_displayed_state() {
        let slot = MemoryStore::new();
        let mut publisher = SignalPublisher::new(slot.clone());
        let mut monitor = SignalMonitor::default();

        publisher.publish(GestureState::new(true, false), T).unwrap();
        monitor.poll(&slot, T + 500.0);
        let shown_at = monitor.last_update().map(str::to_string);

        let status = monitor.poll(&slot, T + 2500.0);
        assert_eq!(status, RelayStatus::Stale { age_ms: 2500.0 });
        assert!(!monitor.is_connected());
        assert_eq!(monitor.displayed(), GestureState::new(true, false));
        assert_eq!(monitor.last_update().map(str::to_string), shown_at);
    }

    #[test]
    fn test_staleness_boundary() {
        let slot = MemoryStore::new();
        SignalPublisher::new(slot.clone())
            .publish(GestureState::new(false, true), T)
            .unwrap();

        let mut monitor = SignalMonitor::default();
        assert!(monitor.poll(&slot, T + 1999.0).is_connected());
        assert!(!monitor.poll(&slot, T + 2000.0).is_connected());
    }

    #[test]
    fn test_empty_slot() {
        let mut monitor = SignalMonitor::default();
        let status = monitor.poll(&MemoryStore::new(), T);
        assert_eq!(status, RelayStatus::Disconnected { reason: DisconnectReason::Empty });
        assert_eq!(monitor.last_update(), None);
    }

    #[test]
    fn test_malformed_payload_disconnects() {
        let slot = MemoryStore::new();
        let mut monitor = SignalMonitor::default();

        SignalPublisher::new(slot.clone())
            .publish(GestureState::new(true, true), T)
            .unwrap();
        monitor.poll(&slot, T + 100.0);
        assert!(monitor.is_connected());

        slot.store("{oops").unwrap();
        let status = monitor.poll(&slot, T + 200.0);
        assert_eq!(status, RelayStatus::Disconnected { reason: DisconnectReason::Malformed });
        assert!(!monitor.is_connected());
        assert_eq!(monitor.displayed(), GestureState::new(true, true));
    }

    #[test]
    fn test_missing_timestamp_is_stale() {
        let slot = MemoryStore::new();
        slot.store(r#"{"leftArmRaised":true,"rightArmRaised":true}"#).unwrap();

        let mut monitor = SignalMonitor::default();
        let status = monitor.poll(&slot, T);
        assert!(matches!(status, RelayStatus::Stale { .. }));
        assert_eq!(monitor.displayed(), GestureState::default());
    }

    struct UnreadableStore;

    impl SignalStore for UnreadableStore {
        fn load(&self) -> Result<Option<String>, RelayError> {
            Err(RelayError::Unavailable)
        }

        fn store(&self, _value: &str) -> Result<(), RelayError> {
            Err(RelayError::Unavailable)
        }
    }

    #[test]
    fn test_unreadable_storage() {
        let mut monitor = SignalMonitor::default();
        let status = monitor.poll(&UnreadableStore, T);
        assert_eq!(status, RelayStatus::Disconnected { reason: DisconnectReason::Unavailable });
    }

    #[test]
    fn test_snapshot_json() {
        let monitor = SignalMonitor::default();
        let json = serde_json::to_string(&monitor.snapshot()).unwrap();
        assert_eq!(
            json,
            r#"{"connected":false,"leftArmRaised":false,"rightArmRaised":false,"lastUpdate":null}"#
        );
    }

    #[test]
    fn test_classified_pose_reaches_consumer() {
        use crate::gesture::analyze_pose;
        use crate::pose::{Landmark, Pose, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST};

        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0, 1.0); 33];
        lms[LEFT_SHOULDER].y = 0.4;
        lms[LEFT_ELBOW].y = 0.3;
        lms[LEFT_WRIST].y = 0.2;
        let state = analyze_pose(&[Pose::new(lms)]);

        // Producer and consumer hold separate handles to one slot
        let producer_slot = MemoryStore::new();
        let consumer_slot = producer_slot.clone();
        SignalPublisher::new(producer_slot).publish(state, T).unwrap();

        let mut monitor = SignalMonitor::default();
        monitor.poll(&consumer_slot, T + 100.0);
        assert_eq!(monitor.displayed(), GestureState::new(true, false));
    }
}
