//! Named task registry
//!
//! Every recurring callback (animation-frame loop, poll timer) is owned by a
//! handle registered under a name. Stopping by name, restarting under the same
//! name, or dropping the registry always cancels the old handle.

use std::collections::HashMap;

/// Something that can stop a scheduled callback. Must be idempotent.
pub trait Cancel {
    fn cancel(&mut self);
}

impl<T: Cancel + ?Sized> Cancel for Box<T> {
    fn cancel(&mut self) {
        (**self).cancel();
    }
}

pub struct TaskRegistry<H: Cancel> {
    tasks: HashMap<String, H>,
}

impl<H: Cancel> TaskRegistry<H> {
    pub fn new() -> Self {
        Self { tasks: HashMap::new() }
    }

    /// Register `handle` under `name`, cancelling any task already there
    pub fn start(&mut self, name: &str, handle: H) {
        if let Some(mut previous) = self.tasks.insert(name.to_string(), handle) {
            log::debug!("Task '{}' restarted, cancelling previous run", name);
            previous.cancel();
        }
    }

    /// Cancel and forget the task. Returns false if nothing was running.
    pub fn stop(&mut self, name: &str) -> bool {
        match self.tasks.remove(name) {
            Some(mut handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn stop_all(&mut self) {
        for (_, mut handle) in self.tasks.drain() {
            handle.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<H: Cancel> Default for TaskRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Cancel> Drop for TaskRegistry<H> {
    fn drop(&mut self) {
        self.stop_all();
    }
}
