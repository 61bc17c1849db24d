//! Self-stopping pulse timer

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Repeating tick counter that fires `on_expire` once the count exceeds
/// `max_ticks`. The task is aborted when the timer is dropped.
#[derive(Debug)]
pub struct PulseTimer {
    task: JoinHandle<()>,
}

impl PulseTimer {
    /// Start the timer on the current tokio runtime.
    ///
    /// Returns `None` when called outside a runtime or with a zero period.
    pub fn start<F>(period: Duration, max_ticks: u32, on_expire: F) -> Option<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        if period.is_zero() {
            return None;
        }
        let runtime = Handle::try_current().ok()?;

        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut ticks: u32 = 0;
            loop {
                ticker.tick().await;
                ticks += 1;
                tracing::trace!(ticks, "pulse tick");
                if ticks > max_ticks {
                    break;
                }
            }
            on_expire();
        });

        Some(Self { task })
    }

    #[cfg(test)]
    pub(crate) fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PulseTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
