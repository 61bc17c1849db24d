//! Project status badge
//!
//! Three states (`idle`, `updating`, `processing`) rendered on a host
//! surface. Animated states pulse for a bounded number of ticks, and the
//! last state survives restarts through a [`StatusStore`](crate::state::StatusStore).

mod handle;
mod indicator;
mod surface;
mod terminal;
mod timer;

pub use handle::StatusHandle;
pub use indicator::{PulseSettings, StatusIndicator, DEFAULT_PROCESSING_LABEL};
pub use surface::{BadgeSurface, BadgeView, LogSurface, MemorySurface};
pub use terminal::TerminalBadge;
pub use timer::PulseTimer;
