//! Drink-water reminder scheduling.
//!
//! The scheduler owns at most one repeating timer and mirrors its enabled
//! state into a client-local key-value store so a reload within the same
//! session picks the schedule back up. Platform notification and storage
//! surfaces are injected as narrow traits so the logic runs the same against
//! a browser shim or the in-memory fakes used in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Storage key for the reminder interval, in minutes, as a decimal string.
pub const REMINDER_KEY: &str = "hydration_reminder_minutes";

/// Suggested interval when the user is prompted to enable reminders.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 120;

const REMINDER_TITLE: &str = "Time to drink water 💧";
const REMINDER_BODY: &str = "Tap to log your intake!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    /// The user has not decided yet.
    Prompt,
}

pub trait PermissionSource: Send + Sync + 'static {
    /// Whether the platform has a notification surface at all.
    fn supported(&self) -> bool {
        true
    }

    fn state(&self) -> PermissionState;

    /// Ask the user for permission. Fire-and-forget; the answer shows up in
    /// later `state` calls.
    fn request(&self);
}

pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, title: &str, body: &str);
}

/// Client-local persistence, one string value per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Arc<K> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Surfaces the toggle flow needs to talk to the user.
pub trait Prompter {
    /// Ask for an interval in minutes, offering a suggestion. `None` means
    /// the user dismissed the prompt; the raw text is parsed by the caller.
    fn ask_interval(&self, suggested_minutes: u32) -> Option<String>;

    fn inform(&self, message: &str);
}

/// Two states only: disabled (no timer, no persisted value) and enabled
/// (timer armed, interval persisted). The timer handle is `Some` iff
/// reminders are enabled.
pub struct ReminderScheduler<P, N, K> {
    permissions: Arc<P>,
    notifier: Arc<N>,
    store: K,
    timer: Option<JoinHandle<()>>,
}

impl<P, N, K> ReminderScheduler<P, N, K>
where
    P: PermissionSource,
    N: Notifier,
    K: KeyValueStore,
{
    pub fn new(permissions: Arc<P>, notifier: Arc<N>, store: K) -> Self {
        Self {
            permissions,
            notifier,
            store,
            timer: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn request_permission(&self) {
        if !self.permissions.supported() {
            return;
        }
        if self.permissions.state() == PermissionState::Prompt {
            self.permissions.request();
        }
    }

    /// Arms the schedule, replacing any existing one, and persists the
    /// interval. Callers guard against non-positive intervals; `start`
    /// itself does not.
    pub fn start(&mut self, interval_minutes: u32) {
        self.cancel_timer();

        let period = Duration::from_secs(u64::from(interval_minutes) * 60);
        let permissions = Arc::clone(&self.permissions);
        let notifier = Arc::clone(&self.notifier);
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                // Permission is checked per fire, not at arm time: the user
                // may grant or revoke it while the schedule is running.
                if permissions.state() == PermissionState::Granted {
                    notifier.notify(REMINDER_TITLE, REMINDER_BODY);
                }
            }
        }));

        self.store.set(REMINDER_KEY, &interval_minutes.to_string());
    }

    /// Cancels the schedule and clears the persisted interval. Idempotent.
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.store.remove(REMINDER_KEY);
    }

    /// Startup path: ask for permission once, then re-arm a persisted
    /// schedule. Absent, zero, or garbage values mean disabled.
    pub fn restore_on_load(&mut self) {
        self.request_permission();
        let saved = self
            .store
            .get(REMINDER_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);
        if saved > 0 {
            self.start(saved);
        }
    }

    /// The toggle-control flow: flip between enabled and disabled, prompting
    /// for an interval on the way up. A dismissed prompt or non-positive
    /// answer leaves everything untouched.
    pub fn toggle(&mut self, prompter: &impl Prompter) {
        if !self.permissions.supported() {
            prompter.inform("Notifications are not supported on this platform.");
            return;
        }
        if self.permissions.state() != PermissionState::Granted {
            self.permissions.request();
        }

        if self.is_active() {
            self.stop();
            prompter.inform("Reminders disabled.");
        } else {
            let minutes = prompter
                .ask_interval(DEFAULT_INTERVAL_MINUTES)
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .unwrap_or(0);
            if minutes > 0 {
                self.start(minutes);
                prompter.inform("Reminders enabled.");
            }
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<P, N, K> Drop for ReminderScheduler<P, N, K> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub struct FakePermissions {
        pub supported: bool,
        pub state: Mutex<PermissionState>,
        pub requests: AtomicUsize,
    }

    impl FakePermissions {
        pub fn new(state: PermissionState) -> Self {
            Self {
                supported: true,
                state: Mutex::new(state),
                requests: AtomicUsize::new(0),
            }
        }

        pub fn unsupported() -> Self {
            Self {
                supported: false,
                ..Self::new(PermissionState::Prompt)
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    impl PermissionSource for FakePermissions {
        fn supported(&self) -> bool {
            self.supported
        }

        fn state(&self) -> PermissionState {
            *self.state.lock().unwrap()
        }

        fn request(&self) {
            self.requests.fetch_add(1, Ordering::SeqCst);
            // Fakes are generous: asking is granting.
            *self.state.lock().unwrap() = PermissionState::Granted;
        }
    }

    #[derive(Default)]
    pub struct CountingNotifier {
        count: AtomicUsize,
        pub last: Mutex<Option<(String, String)>>,
    }

    impl CountingNotifier {
        pub fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.count.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((title.to_string(), body.to_string()));
        }
    }

    pub struct ScriptedPrompter {
        pub answer: Option<String>,
        pub messages: Mutex<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn answering(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                messages: Mutex::new(Vec::new()),
            }
        }

        pub fn dismissing() -> Self {
            Self {
                answer: None,
                messages: Mutex::new(Vec::new()),
            }
        }

        pub fn informed(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask_interval(&self, _suggested_minutes: u32) -> Option<String> {
            self.answer.clone()
        }

        fn inform(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }
}
