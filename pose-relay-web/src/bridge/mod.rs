//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod producer;
mod consumer;
mod settings;
mod storage;
mod tasks;

pub use producer::{
    start_tracking,
    stop_tracking,
    is_tracking,
    should_process_frame,
    publish_pose_results,
    get_gesture_state,
    get_shoulder_width,
};

pub use consumer::{
    start_monitor,
    stop_monitor,
    poll_relay,
    is_connected,
    get_last_update,
    get_displayed_state,
    init_scene,
    get_camera_position,
    get_ball_radius,
    get_view_name,
    tick_scene,
};

pub use settings::{configure, set_log_level};
pub use storage::LocalStorageStore;
pub use tasks::{TRACKING_TASK, MONITOR_TASK};
