//! Client-side intake logging.
//!
//! One fire-and-forget round-trip per button press: post the amount, then
//! push the returned stats into whatever display is attached. The network
//! and the display are both injected, so the flow is exercised in tests
//! with fakes and in the browser by the page script.

use crate::models::LogResponse;
use std::future::Future;
use tracing::warn;

/// The four text fields the widget keeps current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    TodayTotal,
    Goal,
    Percent,
    Streak,
}

/// Proportional visuals, each scaled to the progress percent. A page may
/// have either, both, or neither; absent ones are a sink no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressVisual {
    BottleFill,
    ProgressBar,
}

/// Named display sinks, in place of direct DOM lookups.
pub trait UiSinks {
    fn set_text(&self, field: StatField, value: &str);
    fn set_proportion(&self, visual: ProgressVisual, pct: u8);
}

/// The single outbound call the widget makes.
pub trait IntakeTransport {
    type Error: std::fmt::Display;

    fn post_log(
        &self,
        amount_ml: u32,
    ) -> impl Future<Output = Result<LogResponse, Self::Error>> + Send;
}

pub struct IntakeLogger<T, V> {
    transport: T,
    view: V,
}

impl<T, V> IntakeLogger<T, V>
where
    T: IntakeTransport,
    V: UiSinks,
{
    pub fn new(transport: T, view: V) -> Self {
        Self { transport, view }
    }

    /// Logs one intake and refreshes the display from the response. Failures
    /// are recorded for diagnostics and otherwise swallowed: the display is
    /// left as it was and nothing is retried.
    pub async fn log_intake(&self, amount_ml: u32) {
        let update = match self.transport.post_log(amount_ml).await {
            Ok(update) => update,
            Err(err) => {
                warn!("failed to log {amount_ml} ml: {err}");
                return;
            }
        };

        if update.ok {
            self.apply(&update);
        }
    }

    fn apply(&self, update: &LogResponse) {
        self.view
            .set_text(StatField::TodayTotal, &update.today_total.to_string());
        self.view.set_text(StatField::Goal, &update.goal.to_string());
        self.view
            .set_text(StatField::Percent, &update.pct.to_string());
        self.view
            .set_text(StatField::Streak, &update.streak.to_string());
        self.view.set_proportion(ProgressVisual::BottleFill, update.pct);
        self.view.set_proportion(ProgressVisual::ProgressBar, update.pct);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Replays a scripted outcome for every post.
    #[derive(Clone)]
    pub enum FakeTransport {
        Respond(LogResponse),
        Fail(&'static str),
    }

    impl IntakeTransport for FakeTransport {
        type Error = &'static str;

        async fn post_log(&self, _amount_ml: u32) -> Result<LogResponse, Self::Error> {
            match self {
                FakeTransport::Respond(update) => Ok(update.clone()),
                FakeTransport::Fail(message) => Err(message),
            }
        }
    }

    #[derive(Default)]
    pub struct RecordingSinks {
        pub texts: Mutex<HashMap<StatField, String>>,
        pub proportions: Mutex<HashMap<ProgressVisual, u8>>,
    }

    impl RecordingSinks {
        pub fn is_untouched(&self) -> bool {
            self.texts.lock().unwrap().is_empty() && self.proportions.lock().unwrap().is_empty()
        }

        pub fn text(&self, field: StatField) -> Option<String> {
            self.texts.lock().unwrap().get(&field).cloned()
        }

        pub fn proportion(&self, visual: ProgressVisual) -> Option<u8> {
            self.proportions.lock().unwrap().get(&visual).copied()
        }
    }

    impl UiSinks for RecordingSinks {
        fn set_text(&self, field: StatField, value: &str) {
            self.texts.lock().unwrap().insert(field, value.to_string());
        }

        fn set_proportion(&self, visual: ProgressVisual, pct: u8) {
            self.proportions.lock().unwrap().insert(visual, pct);
        }
    }

    impl<V: UiSinks> UiSinks for Arc<V> {
        fn set_text(&self, field: StatField, value: &str) {
            (**self).set_text(field, value)
        }

        fn set_proportion(&self, visual: ProgressVisual, pct: u8) {
            (**self).set_proportion(visual, pct)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use std::sync::Arc;

    fn update(pct: u8) -> LogResponse {
        LogResponse {
            ok: true,
            today_total: 1250,
            goal: 3000,
            pct,
            streak: 4,
        }
    }

    #[tokio::test]
    async fn success_updates_all_fields_and_both_visuals() {
        let sinks = Arc::new(RecordingSinks::default());
        let logger = IntakeLogger::new(FakeTransport::Respond(update(42)), Arc::clone(&sinks));

        logger.log_intake(250).await;

        assert_eq!(sinks.text(StatField::TodayTotal).as_deref(), Some("1250"));
        assert_eq!(sinks.text(StatField::Goal).as_deref(), Some("3000"));
        assert_eq!(sinks.text(StatField::Percent).as_deref(), Some("42"));
        assert_eq!(sinks.text(StatField::Streak).as_deref(), Some("4"));
        assert_eq!(sinks.proportion(ProgressVisual::BottleFill), Some(42));
        assert_eq!(sinks.proportion(ProgressVisual::ProgressBar), Some(42));
    }

    #[tokio::test]
    async fn transport_failure_leaves_display_untouched() {
        let sinks = Arc::new(RecordingSinks::default());
        let logger = IntakeLogger::new(FakeTransport::Fail("connection refused"), Arc::clone(&sinks));

        logger.log_intake(250).await;

        assert!(sinks.is_untouched());
    }

    #[tokio::test]
    async fn unsuccessful_response_leaves_display_untouched() {
        let sinks = Arc::new(RecordingSinks::default());
        let mut rejected = update(42);
        rejected.ok = false;
        let logger = IntakeLogger::new(FakeTransport::Respond(rejected), Arc::clone(&sinks));

        logger.log_intake(250).await;

        assert!(sinks.is_untouched());
    }
}
