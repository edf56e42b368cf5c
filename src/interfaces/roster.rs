//! Declarative descriptions of strategies, as read from a roster file or
//! taken from the built-in demonstration set.

use crate::domain::money::Balance;
use crate::domain::notification::{EmailNotification, Priority, PushNotification, SmsNotification};
use crate::domain::payment::{Bitcoin, CreditCard, PayPal};
use crate::domain::ports::{NotificationChannelBox, PaymentMethodBox, SinkRef};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    CreditCard,
    Paypal,
    Bitcoin,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentEntry {
    pub kind: PaymentKind,
    pub id: String,
    pub balance: Decimal,
}

impl PaymentEntry {
    pub fn new(kind: PaymentKind, id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            kind,
            id: id.into(),
            balance,
        }
    }

    pub fn into_method(self, sink: SinkRef) -> PaymentMethodBox {
        let balance = Balance::new(self.balance);
        match self.kind {
            PaymentKind::CreditCard => Box::new(CreditCard::new(self.id, balance, sink)),
            PaymentKind::Paypal => Box::new(PayPal::new(self.id, balance, sink)),
            PaymentKind::Bitcoin => Box::new(Bitcoin::new(self.id, balance, sink)),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ChannelEntry {
    pub kind: ChannelKind,
    pub sender: String,
    /// Overrides the channel's built-in priority when present.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ChannelEntry {
    pub fn new(kind: ChannelKind, sender: impl Into<String>) -> Self {
        Self {
            kind,
            sender: sender.into(),
            priority: None,
        }
    }

    pub fn into_channel(self, sink: SinkRef) -> NotificationChannelBox {
        match (self.kind, self.priority) {
            (ChannelKind::Email, None) => Box::new(EmailNotification::new(self.sender, sink)),
            (ChannelKind::Email, Some(p)) => {
                Box::new(EmailNotification::new(self.sender, sink).with_priority(p))
            }
            (ChannelKind::Sms, None) => Box::new(SmsNotification::new(self.sender, sink)),
            (ChannelKind::Sms, Some(p)) => {
                Box::new(SmsNotification::new(self.sender, sink).with_priority(p))
            }
            (ChannelKind::Push, None) => Box::new(PushNotification::new(self.sender, sink)),
            (ChannelKind::Push, Some(p)) => {
                Box::new(PushNotification::new(self.sender, sink).with_priority(p))
            }
        }
    }
}

/// The payment methods used when no roster is given.
pub fn default_payment_entries() -> Vec<PaymentEntry> {
    vec![
        PaymentEntry::new(PaymentKind::CreditCard, "Alice Martin", dec!(500.00)),
        PaymentEntry::new(PaymentKind::Paypal, "alice@example.com", dec!(200.00)),
        PaymentEntry::new(
            PaymentKind::Bitcoin,
            "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            dec!(0.10),
        ),
    ]
}

/// The notification channels used when no roster is given.
pub fn default_channel_entries() -> Vec<ChannelEntry> {
    vec![
        ChannelEntry::new(ChannelKind::Email, "noreply@example.com"),
        ChannelEntry::new(ChannelKind::Sms, "+33600000000"),
        ChannelEntry::new(ChannelKind::Push, "com.example.app"),
    ]
}
