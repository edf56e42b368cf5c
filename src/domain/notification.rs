use super::ports::{NotificationChannel, SinkRef};
use crate::error::StrategyError;
use serde::Deserialize;
use std::fmt;

/// Dispatch priority of a notification channel. Higher is sent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum Priority {
    Low = 0,
    Normal = 1,
    High = 2,
}

impl Priority {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = StrategyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Normal),
            2 => Ok(Self::High),
            other => Err(StrategyError::Validation(format!(
                "Priority must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Email channel, normal priority by default.
pub struct EmailNotification {
    from_address: String,
    priority: Priority,
    sink: SinkRef,
}

impl EmailNotification {
    pub const KIND: &'static str = "Email";

    pub fn new(from_address: impl Into<String>, sink: SinkRef) -> Self {
        Self {
            from_address: from_address.into(),
            priority: Priority::Normal,
            sink,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl NotificationChannel for EmailNotification {
    fn send(&self, recipient: &str, message: &str) {
        self.sink.emit(&format!(
            "[{}] From: {} To: {} — {}",
            Self::KIND,
            self.from_address,
            recipient,
            message
        ));
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}

/// SMS channel, high priority by default.
pub struct SmsNotification {
    phone_number: String,
    priority: Priority,
    sink: SinkRef,
}

impl SmsNotification {
    pub const KIND: &'static str = "SMS";

    pub fn new(phone_number: impl Into<String>, sink: SinkRef) -> Self {
        Self {
            phone_number: phone_number.into(),
            priority: Priority::High,
            sink,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl NotificationChannel for SmsNotification {
    fn send(&self, recipient: &str, message: &str) {
        self.sink.emit(&format!(
            "[{}] From: {} To: {} — {}",
            Self::KIND,
            self.phone_number,
            recipient,
            message
        ));
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}

/// Mobile push channel, low priority by default.
///
/// Lines read `User:` where the other channels read `To:`.
pub struct PushNotification {
    app_id: String,
    priority: Priority,
    sink: SinkRef,
}

impl PushNotification {
    pub const KIND: &'static str = "Push";

    pub fn new(app_id: impl Into<String>, sink: SinkRef) -> Self {
        Self {
            app_id: app_id.into(),
            priority: Priority::Low,
            sink,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl NotificationChannel for PushNotification {
    fn send(&self, recipient: &str, message: &str) {
        self.sink.emit(&format!(
            "[{}] App: {} User: {} — {}",
            Self::KIND,
            self.app_id,
            recipient,
            message
        ));
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn kind(&self) -> &str {
        Self::KIND
    }
}
