//! Consumer bridge - runs in each scene tab
//!
//! Polls the relay slot on a timer, keeps the displayed gesture state and
//! drives the ball field the JS renderer draws.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use super::producer::state_to_bytes;
use super::settings;
use super::storage::LocalStorageStore;
use super::tasks::{self, MONITOR_TASK};
use crate::config::{RelayConfig, CHANNEL_KEY};
use crate::relay::{MonitorSnapshot, SignalMonitor};
use crate::scene::{BallField, CameraAngle, BALL_RADIUS, CAMERA_FOV};
use crate::schedule::IntervalTimer;

struct ConsumerState {
    store: LocalStorageStore,
    monitor: SignalMonitor,
    field: BallField,
    angle: CameraAngle,
}

impl Default for ConsumerState {
    fn default() -> Self {
        Self {
            store: LocalStorageStore::new(CHANNEL_KEY),
            monitor: SignalMonitor::default(),
            field: BallField::new(),
            angle: CameraAngle::Default,
        }
    }
}

thread_local! {
    static CONSUMER: RefCell<ConsumerState> = RefCell::new(ConsumerState::default());
}

pub(crate) fn apply_relay_config(relay: &RelayConfig) {
    CONSUMER.with(|c| {
        let mut consumer = c.borrow_mut();
        consumer.store = LocalStorageStore::new(relay.channel_key.clone());
        consumer.monitor.set_staleness_ms(relay.staleness_ms);
    });
}

fn poll_once() -> MonitorSnapshot {
    let now = js_sys::Date::now();
    CONSUMER.with(|c| {
        let mut guard = c.borrow_mut();
        let consumer = &mut *guard;
        consumer.monitor.poll(&consumer.store, now);
        consumer.monitor.snapshot()
    })
}

/// Poll, then hand the snapshot JSON to `on_update`. No borrow is held while
/// JS runs, so the callback may call back into the bridge.
fn poll_and_notify(on_update: &js_sys::Function) {
    let snapshot = poll_once();
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            if let Err(err) = on_update.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                log::error!("Relay update callback threw: {:?}", err);
            }
        }
        Err(err) => log::error!("Failed to encode relay snapshot: {}", err),
    }
}

// ============================================================================
// RELAY MONITOR
// ============================================================================

/// Poll immediately, then every poll interval. `on_update(json)` receives
/// `{connected, leftArmRaised, rightArmRaised, lastUpdate}` after each poll.
#[wasm_bindgen]
pub fn start_monitor(on_update: js_sys::Function) -> Result<(), JsValue> {
    poll_and_notify(&on_update);

    let period = settings::relay_config().poll_interval_ms;
    let timer = IntervalTimer::start(period, move || poll_and_notify(&on_update))?;

    tasks::start(MONITOR_TASK, Box::new(timer));
    log::info!("Relay monitor polling every {}ms", period);
    Ok(())
}

/// Stop polling (call on tab teardown). Returns false if not running.
#[wasm_bindgen]
pub fn stop_monitor() -> bool {
    tasks::stop(MONITOR_TASK)
}

/// Single manual poll; returns whether a fresh signal was found
#[wasm_bindgen]
pub fn poll_relay() -> bool {
    poll_once().connected
}

#[wasm_bindgen]
pub fn is_connected() -> bool {
    CONSUMER.with(|c| c.borrow().monitor.is_connected())
}

/// Local time of the last fresh message, e.g. "14:03:27"
#[wasm_bindgen]
pub fn get_last_update() -> Option<String> {
    CONSUMER.with(|c| c.borrow().monitor.last_update().map(str::to_string))
}

/// Displayed gesture state as `[left, right]` (0/1)
#[wasm_bindgen]
pub fn get_displayed_state() -> Vec<u8> {
    CONSUMER.with(|c| state_to_bytes(c.borrow().monitor.displayed()))
}

// ============================================================================
// SCENE
// ============================================================================

/// Select the view from the `?angle=` query value and reset the balls
#[wasm_bindgen]
pub fn init_scene(angle: Option<String>) -> String {
    let angle = CameraAngle::from_query(angle.as_deref());
    CONSUMER.with(|c| {
        let mut consumer = c.borrow_mut();
        consumer.angle = angle;
        consumer.field.reset();
    });
    log::info!("Scene view: {}", angle.view_name());
    angle.as_str().to_string()
}

/// `[x, y, z, fov]` for the selected view
#[wasm_bindgen]
pub fn get_camera_position() -> Vec<f32> {
    let [x, y, z] = CONSUMER.with(|c| c.borrow().angle.position());
    vec![x, y, z, CAMERA_FOV]
}

/// Sphere radius the renderer should use for every ball
#[wasm_bindgen]
pub fn get_ball_radius() -> f32 {
    BALL_RADIUS
}

#[wasm_bindgen]
pub fn get_view_name() -> String {
    CONSUMER.with(|c| c.borrow().angle.view_name().to_string())
}

/// Advance ball animation one render frame; returns `[x, y, z, color]` per ball
#[wasm_bindgen]
pub fn tick_scene() -> Vec<f32> {
    CONSUMER.with(|c| {
        let mut guard = c.borrow_mut();
        let consumer = &mut *guard;
        consumer.field.tick(consumer.monitor.displayed());
        consumer.field.as_flat()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_radius_matches_scene() {
        assert_eq!(get_ball_radius(), BALL_RADIUS);
        assert!(get_ball_radius() > 0.0);
    }
}
