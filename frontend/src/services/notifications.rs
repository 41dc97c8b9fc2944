use log::{error, warn};
use uuid::Uuid;
use yew::Callback;

use super::error::ApiError;

pub const SUCCESS_DURATION_MS: u32 = 2000;
pub const ALERT_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Modifier class, rendered next to `toast`
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// A transient message shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u32,
}

/// Fire-and-forget channel for user-facing outcome messages
#[derive(Clone, PartialEq)]
pub struct Notifier {
    sink: Callback<Notification>,
}

impl Notifier {
    pub fn new(sink: Callback<Notification>) -> Self {
        Self { sink }
    }

    pub fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message.to_string(), SUCCESS_DURATION_MS);
    }

    pub fn warning(&self, message: &str, cause: &ApiError) {
        warn!("{}: {}", message, cause);
        self.push(
            NotificationKind::Warning,
            with_detail(message, Some(cause)),
            ALERT_DURATION_MS,
        );
    }

    pub fn error(&self, message: &str, cause: Option<&ApiError>) {
        match cause {
            Some(cause) => error!("{}: {}", message, cause),
            None => error!("{}", message),
        }
        self.push(
            NotificationKind::Error,
            with_detail(message, cause),
            ALERT_DURATION_MS,
        );
    }

    fn push(&self, kind: NotificationKind, message: String, duration_ms: u32) {
        self.sink.emit(Notification {
            id: Uuid::new_v4(),
            kind,
            message,
            duration_ms,
        });
    }
}

fn with_detail(message: &str, cause: Option<&ApiError>) -> String {
    match cause.map(ApiError::detail).filter(|detail| !detail.is_empty()) {
        Some(detail) => format!("{}. {}", message, detail),
        None => message.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Notifier that records everything it is asked to show
    pub fn recording_notifier() -> (Notifier, Rc<RefCell<Vec<Notification>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let log = log.clone();
            Callback::from(move |notification: Notification| log.borrow_mut().push(notification))
        };
        (Notifier::new(sink), log)
    }
}
