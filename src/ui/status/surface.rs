//! Host surface the status badge draws onto

use parking_lot::Mutex;

use crate::models::BadgeState;

/// Everything a surface needs to draw the badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub icon: String,
    pub text: String,
    /// Pulse animation is running
    pub pulsing: bool,
    pub visible: bool,
}

impl Default for BadgeView {
    fn default() -> Self {
        let idle = BadgeState::Idle.descriptor();
        Self {
            icon: idle.icon.to_string(),
            text: idle.label.to_string(),
            pulsing: false,
            visible: false,
        }
    }
}

/// Something that can display the badge
///
/// `render` receives the complete view after every mutation.
pub trait BadgeSurface: Send + Sync {
    fn render(&self, view: &BadgeView);
}

/// Headless surface that reports badge changes to the log
#[derive(Debug, Default)]
pub struct LogSurface;

impl BadgeSurface for LogSurface {
    fn render(&self, view: &BadgeView) {
        tracing::debug!(
            icon = %view.icon,
            text = %view.text,
            pulsing = view.pulsing,
            visible = view.visible,
            "badge"
        );
    }
}

/// Surface that keeps every rendered frame
#[derive(Debug, Default)]
pub struct MemorySurface {
    frames: Mutex<Vec<BadgeView>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<BadgeView> {
        self.frames.lock().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.frames.lock().len()
    }
}

impl BadgeSurface for MemorySurface {
    fn render(&self, view: &BadgeView) {
        self.frames.lock().push(view.clone());
    }
}
