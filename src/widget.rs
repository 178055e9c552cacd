//! Page-level wiring for the hydration widget.
//!
//! Mirrors what the page script does on load: restore any persisted
//! reminder schedule, then route control events to the scheduler or the
//! intake logger.

use crate::intake::{IntakeLogger, IntakeTransport, UiSinks};
use crate::reminders::{KeyValueStore, Notifier, PermissionSource, Prompter, ReminderScheduler};

/// The controls the page exposes: any number of log buttons, each carrying
/// a fixed quantity, and one reminder toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    LogButton(u32),
    ToggleReminders,
}

pub struct HydrationWidget<P, N, K, T, V, U> {
    scheduler: ReminderScheduler<P, N, K>,
    logger: IntakeLogger<T, V>,
    prompter: U,
}

impl<P, N, K, T, V, U> HydrationWidget<P, N, K, T, V, U>
where
    P: PermissionSource,
    N: Notifier,
    K: KeyValueStore,
    T: IntakeTransport,
    V: UiSinks,
    U: Prompter,
{
    pub fn new(
        scheduler: ReminderScheduler<P, N, K>,
        logger: IntakeLogger<T, V>,
        prompter: U,
    ) -> Self {
        Self {
            scheduler,
            logger,
            prompter,
        }
    }

    /// Load-time setup, the `DOMContentLoaded` equivalent.
    pub fn init(&mut self) {
        self.scheduler.restore_on_load();
    }

    pub async fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::LogButton(amount_ml) => self.logger.log_intake(amount_ml).await,
            WidgetEvent::ToggleReminders => self.scheduler.toggle(&self.prompter),
        }
    }

    pub fn reminders_active(&self) -> bool {
        self.scheduler.is_active()
    }
}
