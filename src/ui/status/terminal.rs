//! Terminal badge drawn with an indicatif spinner on stderr

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use super::surface::{BadgeSurface, BadgeView};

const PULSE_FRAME: Duration = Duration::from_millis(120);
const PULSE_TEMPLATE: &str = "{spinner:.cyan} {prefix} {msg:.cyan.bold}";
const STATIC_TEMPLATE: &str = "  {prefix} {msg}";

pub struct TerminalBadge {
    bar: ProgressBar,
}

impl TerminalBadge {
    /// Badge on stderr, or `None` when stderr is not a terminal
    pub fn locate() -> Option<Arc<Self>> {
        if !std::io::stderr().is_terminal() {
            return None;
        }
        Some(Arc::new(Self {
            bar: ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr()),
        }))
    }

    /// Leave the last frame on screen
    pub fn finish(&self) {
        self.bar.disable_steady_tick();
        if !self.bar.is_hidden() {
            self.bar.finish();
        }
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("◐◓◑◒ ")
}

impl BadgeSurface for TerminalBadge {
    fn render(&self, view: &BadgeView) {
        if !view.visible {
            self.bar.disable_steady_tick();
            self.bar.set_draw_target(ProgressDrawTarget::hidden());
            return;
        }

        if self.bar.is_hidden() {
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }

        if view.pulsing {
            self.bar.set_style(style(PULSE_TEMPLATE));
        } else {
            self.bar.set_style(style(STATIC_TEMPLATE));
        }
        self.bar.set_prefix(view.icon.clone());
        self.bar.set_message(view.text.clone());

        if view.pulsing {
            self.bar.enable_steady_tick(PULSE_FRAME);
        } else {
            self.bar.disable_steady_tick();
            self.bar.tick();
        }
    }
}
