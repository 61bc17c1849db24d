pub mod status;

pub use status::{StatusHandle, StatusIndicator, TerminalBadge};
