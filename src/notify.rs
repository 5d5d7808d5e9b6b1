//! User-facing notifications raised by the dashboard workflows.
//!
//! Services receive a [`Notifier`] instead of reaching for a global toast
//! registry. The server collects notifications per request with
//! [`BufferedNotifier`] and returns them as `alerts`; anything without a
//! request to attach to goes to the log through [`LogNotifier`].

use std::fmt::Display;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

/// How long a notification stays on screen unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Display time in milliseconds.
    #[serde(serialize_with = "duration_millis")]
    pub duration: Duration,
}

fn duration_millis<S: serde::Serializer>(
    value: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
}

pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: &str, duration: Duration);

    fn success(&self, message: &str) {
        self.notify(NotificationLevel::Success, message, DEFAULT_DURATION);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationLevel::Error, message, DEFAULT_DURATION);
    }

    fn warning(&self, message: &str) {
        self.notify(NotificationLevel::Warning, message, DEFAULT_DURATION);
    }

    fn info(&self, message: &str) {
        self.notify(NotificationLevel::Info, message, DEFAULT_DURATION);
    }
}

/// Writes notifications to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NotificationLevel, message: &str, _duration: Duration) {
        match level {
            NotificationLevel::Error => log::error!("{message}"),
            NotificationLevel::Warning => log::warn!("{message}"),
            NotificationLevel::Success | NotificationLevel::Info => log::info!("{message}"),
        }
    }
}

/// Keeps notifications in memory until [`BufferedNotifier::take`] is called.
///
/// Each notification is also echoed through [`LogNotifier`].
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains everything collected so far.
    pub fn take(&self) -> Vec<Notification> {
        match self.buffer.lock() {
            Ok(mut buffer) => std::mem::take(&mut *buffer),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, level: NotificationLevel, message: &str, duration: Duration) {
        LogNotifier.notify(level, message, duration);
        let notification = Notification {
            level,
            message: message.to_string(),
            duration,
        };
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

/// Optional overrides for the text shown by [`report_outcome`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeMessages<'a> {
    pub success: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> OutcomeMessages<'a> {
    pub fn new(success: &'a str, error: &'a str) -> Self {
        Self {
            success: Some(success),
            error: Some(error),
        }
    }

    /// Announces `success` and lets errors speak for themselves.
    pub fn on_success(success: &'a str) -> Self {
        Self {
            success: Some(success),
            error: None,
        }
    }
}

/// Tells the user how an operation went and returns whether it succeeded.
///
/// Success is only announced when a success message is given. Errors always
/// are, with the error's own text when no override is set.
pub fn report_outcome<T, E, N>(
    result: &Result<T, E>,
    messages: OutcomeMessages<'_>,
    notifier: &N,
) -> bool
where
    E: Display,
    N: Notifier + ?Sized,
{
    match result {
        Ok(_) => {
            if let Some(message) = messages.success {
                notifier.success(message);
            }
            true
        }
        Err(err) => {
            match messages.error {
                Some(message) => notifier.error(message),
                None => notifier.error(&err.to_string()),
            }
            false
        }
    }
}
