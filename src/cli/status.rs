use crate::context::ReleaseContext;
use crate::ui::status::{BadgeSurface, LogSurface, StatusIndicator, TerminalBadge};
use crate::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(subcommand)]
    pub action: Option<StatusAction>,

    /// Keep running until the pulse animation has stopped
    #[arg(short, long, global = true)]
    pub follow: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    /// Show the last recorded status (default)
    Show,

    /// Mark the project as processing
    SetProcessing {
        /// Label to display instead of "Processing..."
        message: Option<String>,
    },

    /// Mark the project as updating
    SetUpdating,

    /// Mark the project as idle
    SetIdle,

    /// Hide the badge
    Hide,
}

pub async fn run(ctx: &ReleaseContext, args: StatusArgs) -> Result<()> {
    let badge = TerminalBadge::locate();
    let surface: Arc<dyn BadgeSurface> = match &badge {
        Some(badge) => badge.clone() as Arc<dyn BadgeSurface>,
        None => Arc::new(LogSurface),
    };
    let indicator = ctx.init_indicator(Some(surface))?;

    match args.action.unwrap_or(StatusAction::Show) {
        StatusAction::Show => {}
        StatusAction::SetProcessing { message } => ctx.status.set_processing(message.as_deref())?,
        StatusAction::SetUpdating => ctx.status.set_updating()?,
        StatusAction::SetIdle => ctx.status.set_idle()?,
        StatusAction::Hide => ctx.status.hide(),
    }

    if args.follow {
        wait_for_pulse(ctx, &indicator).await;
    }

    match badge {
        Some(badge) => badge.finish(),
        None => print_plain(&indicator),
    }
    Ok(())
}

/// Sleep tick by tick until the pulse stops, bounded by the pulse length
async fn wait_for_pulse(ctx: &ReleaseContext, indicator: &StatusIndicator) {
    let settings = ctx.pulse_settings();
    for _ in 0..=settings.max_ticks.saturating_add(1) {
        if !indicator.is_pulsing() {
            break;
        }
        tokio::time::sleep(settings.tick).await;
    }
}

fn print_plain(indicator: &StatusIndicator) {
    let Some(view) = indicator.view() else {
        return;
    };
    if !view.visible {
        return;
    }
    let label = if view.pulsing {
        view.text.cyan().bold()
    } else {
        view.text.normal()
    };
    println!("{} {} ({})", view.icon, label, indicator.state());
}
