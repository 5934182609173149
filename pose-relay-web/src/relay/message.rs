//! Relay wire format and freshness check
//!
//! Shape on the wire (camelCase, as other tabs read it from localStorage):
//! `{"leftArmRaised":true,"rightArmRaised":false,"timestamp":1718000000000}`

use serde::{Deserialize, Deserializer, Serialize};
use crate::gesture::GestureState;

/// Latest gesture state plus the wall-clock time it was produced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayMessage {
    #[serde(default, deserialize_with = "null_as_false")]
    pub left_arm_raised: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub right_arm_raised: bool,
    /// Milliseconds since the Unix epoch; absent means "never fresh"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl RelayMessage {
    pub fn new(state: GestureState, timestamp_ms: i64) -> Self {
        Self {
            left_arm_raised: state.left_arm_raised,
            right_arm_raised: state.right_arm_raised,
            timestamp: Some(timestamp_ms),
        }
    }

    pub fn state(&self) -> GestureState {
        GestureState::new(self.left_arm_raised, self.right_arm_raised)
    }

    /// Milliseconds since the message was written (infinite without a timestamp)
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        match self.timestamp {
            Some(ts) => now_ms - ts as f64,
            None => f64::INFINITY,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A message is usable only while younger than the staleness window.
/// A timestamp in the future (clock skew between tabs) counts as fresh.
pub fn is_fresh(message: &RelayMessage, now_ms: f64, staleness_ms: f64) -> bool {
    message.age_ms(now_ms) < staleness_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STALENESS_MS;

    #[test]
    fn test_wire_shape() {
        let msg = RelayMessage::new(GestureState::new(true, false), 1_700_000_000_000);
        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"leftArmRaised":true,"rightArmRaised":false,"timestamp":1700000000000}"#
        );
    }

    #[test]
    fn test_missing_and_null_flags_default_false() {
        let msg = RelayMessage::from_json(r#"{"leftArmRaised":null,"timestamp":5}"#).unwrap();
        assert_eq!(msg.state(), GestureState::default());
        assert_eq!(msg.timestamp, Some(5));
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(RelayMessage::from_json("not json").is_err());
        assert!(RelayMessage::from_json("null").is_err());
        assert!(RelayMessage::from_json(r#"{"leftArmRaised":"yes"}"#).is_err());
    }

    #[test]
    fn test_freshness_window() {
        let msg = RelayMessage::new(GestureState::new(true, false), 10_000);
        assert!(is_fresh(&msg, 10_500.0, STALENESS_MS));
        assert!(is_fresh(&msg, 11_999.0, STALENESS_MS));
        assert!(!is_fresh(&msg, 12_000.0, STALENESS_MS));
        assert!(!is_fresh(&msg, 12_500.0, STALENESS_MS));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let msg = RelayMessage::new(GestureState::default(), 20_000);
        assert!(is_fresh(&msg, 19_000.0, STALENESS_MS));
    }

    #[test]
    fn test_no_timestamp_never_fresh() {
        let msg = RelayMessage::from_json(r#"{"leftArmRaised":true}"#).unwrap();
        assert!(!is_fresh(&msg, 0.0, STALENESS_MS));
    }
}
