pub mod changelog;
pub mod memory;

pub use changelog::{roll_unreleased, unreleased_notes, verify_rollover, ChangelogError, Rollover};
pub use memory::{last_task_number, record_release, MemoryError, MemoryUpdate, ReleaseEntry};
