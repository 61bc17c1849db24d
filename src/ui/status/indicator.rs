//! StatusIndicator - the project status badge state machine

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;

use super::surface::{BadgeSurface, BadgeView};
use super::timer::PulseTimer;
use crate::models::{BadgeState, StatusConfig};
use crate::state::{StatusStore, StoreError};

pub const DEFAULT_PROCESSING_LABEL: &str = "Processing...";

/// Pulse animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSettings {
    /// Length of one tick
    pub tick: Duration,
    /// The pulse stops once the tick count exceeds this
    pub max_ticks: u32,
}

impl Default for PulseSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            max_ticks: 6,
        }
    }
}

impl From<&StatusConfig> for PulseSettings {
    fn from(config: &StatusConfig) -> Self {
        Self {
            tick: config.tick(),
            max_ticks: config.pulse_ticks,
        }
    }
}

struct Inner {
    state: BadgeState,
    view: BadgeView,
    surface: Arc<dyn BadgeSurface>,
    store: Arc<dyn StatusStore>,
    settings: PulseSettings,
    timer: Option<PulseTimer>,
    /// Bumped on every transition; ticks from older timers are ignored
    generation: u64,
}

impl Inner {
    fn render(&self) {
        self.surface.render(&self.view);
    }
}

/// Live badge bound to a host surface and a persisted slot.
///
/// An indicator created without a surface is inert: every operation is a
/// no-op and the state stays `idle`.
#[derive(Clone)]
pub struct StatusIndicator {
    inner: Option<Arc<Mutex<Inner>>>,
}

impl std::fmt::Debug for StatusIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusIndicator")
            .field("active", &self.is_active())
            .field("state", &self.state())
            .finish()
    }
}

impl StatusIndicator {
    /// Indicator with no host surface
    pub fn inert() -> Self {
        Self { inner: None }
    }

    /// Bind to `surface`, restore the persisted state and show the badge.
    ///
    /// A stored `idle` or an unrecognized value leaves the default state.
    pub fn init(
        surface: Option<Arc<dyn BadgeSurface>>,
        store: Arc<dyn StatusStore>,
        settings: PulseSettings,
    ) -> Result<Self, StoreError> {
        let Some(surface) = surface else {
            tracing::debug!("no badge surface, status indicator disabled");
            return Ok(Self::inert());
        };

        let indicator = Self {
            inner: Some(Arc::new(Mutex::new(Inner {
                state: BadgeState::default(),
                view: BadgeView::default(),
                surface,
                store: store.clone(),
                settings,
                timer: None,
                generation: 0,
            }))),
        };

        if let Some(saved) = store.load()? {
            if saved != BadgeState::Idle.as_str() {
                tracing::debug!(state = %saved, "restoring badge state");
                indicator.set_state(&saved)?;
            }
        }

        indicator.show();
        Ok(indicator)
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn state(&self) -> BadgeState {
        self.inner
            .as_ref()
            .map(|inner| inner.lock().state)
            .unwrap_or_default()
    }

    /// Current view, `None` when inert
    pub fn view(&self) -> Option<BadgeView> {
        self.inner.as_ref().map(|inner| inner.lock().view.clone())
    }

    pub fn is_pulsing(&self) -> bool {
        self.view().is_some_and(|view| view.pulsing)
    }

    /// Transition by name; unknown names are ignored
    pub fn set_state(&self, name: &str) -> Result<(), StoreError> {
        match name.parse::<BadgeState>() {
            Ok(state) => self.apply(state),
            Err(e) => {
                tracing::debug!("{}", e);
                Ok(())
            }
        }
    }

    /// Transition to `state` with its descriptor label
    pub fn apply(&self, state: BadgeState) -> Result<(), StoreError> {
        self.transition(state, None)
    }

    pub fn set_processing(&self, message: Option<&str>) -> Result<(), StoreError> {
        self.transition(
            BadgeState::Processing,
            Some(message.unwrap_or(DEFAULT_PROCESSING_LABEL)),
        )
    }

    pub fn set_updating(&self) -> Result<(), StoreError> {
        self.transition(BadgeState::Updating, Some("Updating..."))
    }

    pub fn set_idle(&self) -> Result<(), StoreError> {
        self.transition(BadgeState::Idle, Some("Idle"))
    }

    pub fn show(&self) {
        self.set_visible(true);
    }

    pub fn hide(&self) {
        self.set_visible(false);
    }

    fn set_visible(&self, visible: bool) {
        if let Some(inner) = &self.inner {
            let mut guard = inner.lock();
            guard.view.visible = visible;
            guard.render();
        }
    }

    fn transition(&self, state: BadgeState, label: Option<&str>) -> Result<(), StoreError> {
        let Some(inner) = &self.inner else {
            return Ok(());
        };

        let store = {
            let mut guard = inner.lock();

            // Cancel the superseded pulse before anything else
            guard.timer = None;
            guard.generation += 1;

            let descriptor = state.descriptor();
            guard.state = state;
            guard.view.icon = descriptor.icon.to_string();
            guard.view.text = label.unwrap_or(descriptor.label).to_string();
            update_animation(&mut guard, Arc::downgrade(inner));
            guard.render();

            guard.store.clone()
        };

        tracing::debug!(%state, "badge state changed");
        store.save(state.as_str())
    }
}

/// Start or clear the pulse for the current state
fn update_animation(inner: &mut Inner, handle: Weak<Mutex<Inner>>) {
    inner.view.pulsing = false;
    if !inner.state.descriptor().animated {
        return;
    }

    inner.view.pulsing = true;
    let generation = inner.generation;
    let PulseSettings { tick, max_ticks } = inner.settings;

    inner.timer = PulseTimer::start(tick, max_ticks, move || {
        let Some(inner) = handle.upgrade() else {
            return;
        };
        let mut guard = inner.lock();
        if guard.generation != generation {
            return;
        }
        guard.view.pulsing = false;
        guard.timer = None;
        guard.render();
    });

    if inner.timer.is_none() {
        tracing::debug!("pulse timer not started, pulse will not stop on its own");
    }
}
