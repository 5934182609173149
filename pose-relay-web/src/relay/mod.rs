//! Relay module - cross-tab gesture signal over a shared slot
//!
//! Re-exports only. All logic in submodules.

mod error;
mod message;
mod store;
mod publisher;
mod monitor;

pub use error::RelayError;
pub use message::{is_fresh, RelayMessage};
pub use store::{MemoryStore, SignalStore};
pub use publisher::SignalPublisher;
pub use monitor::{DisconnectReason, MonitorSnapshot, RelayStatus, SignalMonitor};
