//! Browser-clock tasks: requestAnimationFrame loops and setInterval timers
//!
//! Both keep their JS closure alive only while running. Cancelling clears the
//! pending browser handle and drops the closure, so nothing fires afterwards.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use super::registry::Cancel;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no window object in this context")]
    NoWindow,
    #[error("browser refused to schedule callback: {0}")]
    Rejected(String),
}

impl From<ScheduleError> for JsValue {
    fn from(err: ScheduleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn window() -> Result<web_sys::Window, ScheduleError> {
    web_sys::window().ok_or(ScheduleError::NoWindow)
}

// ============================================================================
// ANIMATION FRAME LOOP
// ============================================================================

struct FrameLoopState {
    running: bool,
    frame_id: Option<i32>,
    closure: Option<Closure<dyn FnMut(f64)>>,
}

/// Calls `on_frame(timestamp_ms)` once per display frame until cancelled
pub struct FrameLoop {
    state: Rc<RefCell<FrameLoopState>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, ScheduleError>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(RefCell::new(FrameLoopState {
            running: true,
            frame_id: None,
            closure: None,
        }));

        let weak = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let state = match weak.upgrade() {
                Some(s) => s,
                None => return,
            };
            if !state.borrow().running {
                return;
            }

            on_frame(timestamp);

            // on_frame may have cancelled us
            let mut s = state.borrow_mut();
            if !s.running {
                return;
            }
            if let Err(err) = request_next_frame(&mut s) {
                log::error!("Frame loop stopped: {}", err);
                s.running = false;
                s.closure = None;
            }
        }) as Box<dyn FnMut(f64)>);

        {
            let mut s = state.borrow_mut();
            s.closure = Some(closure);
            request_next_frame(&mut s)?;
        }

        Ok(Self { state })
    }
}

fn request_next_frame(state: &mut FrameLoopState) -> Result<(), ScheduleError> {
    let closure = state.closure.as_ref().ok_or(ScheduleError::Rejected("closure released".into()))?;
    let id = window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| ScheduleError::Rejected(format!("{:?}", e)))?;
    state.frame_id = Some(id);
    Ok(())
}

impl Cancel for FrameLoop {
    fn cancel(&mut self) {
        let mut s = self.state.borrow_mut();
        s.running = false;
        if let Some(id) = s.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        s.closure = None;
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// INTERVAL TIMER
// ============================================================================

/// Calls `on_tick()` every `period_ms` until cancelled
pub struct IntervalTimer {
    handle: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl IntervalTimer {
    pub fn start<F>(period_ms: i32, on_tick: F) -> Result<Self, ScheduleError>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let handle = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| ScheduleError::Rejected(format!("{:?}", e)))?;

        Ok(Self {
            handle: Some(handle),
            closure: Some(closure),
        })
    }
}

impl Cancel for IntervalTimer {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
        self.closure = None;
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
