//! Tunable thresholds for classification and relay
//!
//! Defaults are the fixed values the producer and every consumer tab agree on.
//! `configure()` on the JS side may replace them, but both ends of the relay
//! must then be given the same values.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

// ============================================================================
// FIXED CONSTANTS
// ============================================================================

/// Minimum per-joint visibility for an arm to be considered (exclusive)
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// How far below shoulder height the elbow may sit and still count as raised
pub const ELBOW_TOLERANCE: f32 = 0.1;

/// Poses shorter than this are treated as "no pose"
pub const MIN_LANDMARKS: usize = 25;

/// Relay messages at least this old are treated as "no signal"
pub const STALENESS_MS: f64 = 2000.0;

/// Consumer poll period
pub const POLL_INTERVAL_MS: i32 = 100;

/// localStorage key shared by producer and consumers
pub const CHANNEL_KEY: &str = "poseData";

// ============================================================================
// CONFIG STRUCTURES
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    #[serde(default = "default_elbow_tolerance")]
    pub elbow_tolerance: f32,
    #[serde(default = "default_min_landmarks")]
    pub min_landmarks: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    #[serde(default = "default_channel_key")]
    pub channel_key: String,
    #[serde(default = "default_staleness_ms")]
    pub staleness_ms: f64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: i32,
}

fn default_visibility_threshold() -> f32 { VISIBILITY_THRESHOLD }
fn default_elbow_tolerance() -> f32 { ELBOW_TOLERANCE }
fn default_min_landmarks() -> usize { MIN_LANDMARKS }
fn default_channel_key() -> String { CHANNEL_KEY.to_string() }
fn default_staleness_ms() -> f64 { STALENESS_MS }
fn default_poll_interval_ms() -> i32 { POLL_INTERVAL_MS }

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            elbow_tolerance: default_elbow_tolerance(),
            min_landmarks: default_min_landmarks(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            channel_key: default_channel_key(),
            staleness_ms: default_staleness_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
