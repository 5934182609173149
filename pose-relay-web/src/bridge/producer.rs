//! Producer bridge - runs in the tab that owns the camera
//!
//! JS drives detection (`PoseLandmarker.detectForVideo`) from the frame loop
//! started here, then hands each result back through `publish_pose_results`.
//! Every classification is written to the relay slot immediately.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use super::settings;
use super::storage::LocalStorageStore;
use super::tasks::{self, TRACKING_TASK};
use crate::config::{RelayConfig, CHANNEL_KEY};
use crate::gesture::{analyze_pose_with, shoulder_width_with, GestureState};
use crate::pose::{poses_from_flat, FrameGate};
use crate::relay::SignalPublisher;
use crate::schedule::FrameLoop;

/// Internal storage for the producing context
struct ProducerState {
    publisher: SignalPublisher<LocalStorageStore>,
    gate: FrameGate,
    last_state: GestureState,
    shoulder_width: f32,
}

impl Default for ProducerState {
    fn default() -> Self {
        Self {
            publisher: SignalPublisher::new(LocalStorageStore::new(CHANNEL_KEY)),
            gate: FrameGate::new(),
            last_state: GestureState::default(),
            shoulder_width: 0.0,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static PRODUCER: RefCell<ProducerState> = RefCell::new(ProducerState::default());
}

pub(crate) fn apply_relay_config(relay: &RelayConfig) {
    PRODUCER.with(|p| {
        p.borrow_mut().publisher = SignalPublisher::new(LocalStorageStore::new(relay.channel_key.clone()));
    });
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start the per-frame tracking loop. `frame_callback(timestampMs)` is called
/// on every animation frame; it should run detection when
/// `should_process_frame` allows it. Restarting replaces the previous loop.
#[wasm_bindgen]
pub fn start_tracking(frame_callback: js_sys::Function) -> Result<(), JsValue> {
    PRODUCER.with(|p| p.borrow_mut().gate.reset());

    let frame_loop = FrameLoop::start(move |timestamp| {
        if let Err(err) = frame_callback.call1(&JsValue::NULL, &JsValue::from_f64(timestamp)) {
            log::error!("Tracking frame callback threw: {:?}", err);
        }
    })?;

    tasks::start(TRACKING_TASK, Box::new(frame_loop));
    log::info!("Gesture tracking started");
    Ok(())
}

/// Stop the tracking loop. Returns false if it was not running.
#[wasm_bindgen]
pub fn stop_tracking() -> bool {
    let stopped = tasks::stop(TRACKING_TASK);
    if stopped {
        log::info!("Gesture tracking stopped");
    }
    stopped
}

#[wasm_bindgen]
pub fn is_tracking() -> bool {
    tasks::is_running(TRACKING_TASK)
}

/// True if `video.currentTime` moved since the last processed frame
#[wasm_bindgen]
pub fn should_process_frame(current_time: f64) -> bool {
    PRODUCER.with(|p| p.borrow_mut().gate.accept(current_time))
}

/// Called from JavaScript with `results.landmarks` flattened to a
/// Float32Array of `[x, y, z, visibility]` per landmark, poses back to back.
///
/// Classifies the first pose, writes the result to the relay slot and
/// returns `[left, right]` as 0/1.
#[wasm_bindgen]
pub fn publish_pose_results(data: &[f32], landmarks_per_pose: usize) -> Vec<u8> {
    let poses = poses_from_flat(data, landmarks_per_pose);
    let config = settings::classifier_config();
    let state = analyze_pose_with(&poses, &config);
    let width = shoulder_width_with(&poses, &config);
    let now = js_sys::Date::now();

    PRODUCER.with(|p| {
        let mut producer = p.borrow_mut();
        if let Err(err) = producer.publisher.publish(state, now) {
            log::warn!("Failed to publish pose data: {}", err);
        }
        producer.last_state = state;
        producer.shoulder_width = width;
    });

    state_to_bytes(state)
}

/// Latest classification as `[left, right]` (0/1)
#[wasm_bindgen]
pub fn get_gesture_state() -> Vec<u8> {
    PRODUCER.with(|p| state_to_bytes(p.borrow().last_state))
}

/// Shoulder width of the latest pose (0 when no pose)
#[wasm_bindgen]
pub fn get_shoulder_width() -> f32 {
    PRODUCER.with(|p| p.borrow().shoulder_width)
}

pub(crate) fn state_to_bytes(state: GestureState) -> Vec<u8> {
    vec![state.left_arm_raised as u8, state.right_arm_raised as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_bytes() {
        assert_eq!(state_to_bytes(GestureState::new(true, false)), vec![1, 0]);
        assert_eq!(state_to_bytes(GestureState::default()), vec![0, 0]);
    }
}
