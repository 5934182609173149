//! Gesture module - landmark-to-gesture classification
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod measure;

pub use classifier::{analyze_pose, analyze_pose_with, arm_raised, ArmSide, GestureState};
pub use measure::{shoulder_width, shoulder_width_with, planar_distance};
