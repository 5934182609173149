//! Per-context task registry

use std::cell::RefCell;
use crate::schedule::{Cancel, TaskRegistry};

/// Producer's per-frame detection loop
pub const TRACKING_TASK: &str = "pose-tracking";

/// Consumer's relay poll timer
pub const MONITOR_TASK: &str = "relay-monitor";

thread_local! {
    static TASKS: RefCell<TaskRegistry<Box<dyn Cancel>>> = RefCell::new(TaskRegistry::new());
}

pub(crate) fn start(name: &str, handle: Box<dyn Cancel>) {
    TASKS.with(|t| t.borrow_mut().start(name, handle));
}

pub(crate) fn stop(name: &str) -> bool {
    TASKS.with(|t| t.borrow_mut().stop(name))
}

pub(crate) fn is_running(name: &str) -> bool {
    TASKS.with(|t| t.borrow().is_running(name))
}
