//! Persisted status state
//!
//! The badge remembers its last state across runs in a single slot.

mod store;

pub use store::{FileStatusStore, MemoryStatusStore, StatusStore, StoreError};
