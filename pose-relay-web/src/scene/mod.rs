//! Scene module - renderer-agnostic parameters for consumer views
//!
//! Re-exports only. All logic in submodules.

mod balls;
mod camera;

pub use balls::{Ball, BallField, BALL_RADIUS, BALL_STRIDE, COLOR_RAISED, COLOR_RESTING};
pub use camera::{CameraAngle, ALL_VIEWS, CAMERA_FOV};
