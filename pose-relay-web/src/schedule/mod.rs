//! Schedule module - cooperative tasks started and stopped by name
//!
//! Re-exports only. All logic in submodules.

mod registry;
mod browser;

pub use registry::{Cancel, TaskRegistry};
pub use browser::{FrameLoop, IntervalTimer, ScheduleError};
