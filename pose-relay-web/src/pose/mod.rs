//! Pose module - landmark data as delivered by the pose model
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod frame_gate;

pub use landmarks::{
    poses_from_flat,
    Landmark, Pose,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    POSE_LANDMARK_COUNT, LANDMARK_STRIDE,
};
pub use frame_gate::FrameGate;
