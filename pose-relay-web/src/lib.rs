//! Pose Relay Web - arm-raise gestures shared across browser tabs
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen start hook that installs panic and log forwarding
//!
//! The camera tab classifies MediaPipe landmarks and writes the result to a
//! localStorage slot; scene tabs poll that slot and animate from it.

pub mod config;
pub mod gesture;
pub mod pose;
pub mod relay;
pub mod scene;
pub mod schedule;

mod bridge;
mod logging;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    // Producer
    start_tracking, stop_tracking, is_tracking,
    should_process_frame, publish_pose_results,
    get_gesture_state, get_shoulder_width,
    // Consumer
    start_monitor, stop_monitor, poll_relay, is_connected,
    get_last_update, get_displayed_state,
    init_scene, get_camera_position, get_ball_radius, get_view_name, tick_scene,
    // Settings
    configure, set_log_level,
    LocalStorageStore, TRACKING_TASK, MONITOR_TASK,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("✅ pose-relay-web loaded");
}
