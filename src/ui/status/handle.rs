//! Control façade for the status badge

use parking_lot::RwLock;
use std::sync::Arc;

use super::indicator::StatusIndicator;
use crate::models::BadgeState;
use crate::state::StoreError;

/// Cloneable handle that forwards to the attached indicator.
///
/// Until an indicator is attached every action is a no-op, so callers can
/// drive the badge without knowing whether it was ever initialized.
#[derive(Debug, Clone, Default)]
pub struct StatusHandle {
    slot: Arc<RwLock<Option<StatusIndicator>>>,
}

impl StatusHandle {
    /// Handle with nothing attached
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn attach(&self, indicator: StatusIndicator) {
        *self.slot.write() = Some(indicator);
    }

    pub fn detach(&self) -> Option<StatusIndicator> {
        self.slot.write().take()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.read().is_some()
    }

    /// State of the attached indicator, `idle` when detached
    pub fn state(&self) -> BadgeState {
        self.with(|indicator| indicator.state())
            .unwrap_or_default()
    }

    pub fn set_processing(&self, message: Option<&str>) -> Result<(), StoreError> {
        self.with(|indicator| indicator.set_processing(message))
            .unwrap_or(Ok(()))
    }

    pub fn set_updating(&self) -> Result<(), StoreError> {
        self.with(StatusIndicator::set_updating).unwrap_or(Ok(()))
    }

    pub fn set_idle(&self) -> Result<(), StoreError> {
        self.with(StatusIndicator::set_idle).unwrap_or(Ok(()))
    }

    pub fn hide(&self) {
        self.with(StatusIndicator::hide);
    }

    pub fn show(&self) {
        self.with(StatusIndicator::show);
    }

    fn with<T>(&self, f: impl FnOnce(&StatusIndicator) -> T) -> Option<T> {
        // Clone out so the slot lock is not held while the indicator renders
        let indicator = self.slot.read().clone()?;
        Some(f(&indicator))
    }
}
