#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::rc::Rc;
use tp_strategies::domain::money::Balance;
use tp_strategies::domain::notification::Priority;
use tp_strategies::domain::ports::{NotificationChannel, PaymentMethod};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Pay(String, Decimal),
    Refund(String, Decimal),
    Send(String),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// A payment method that records every call it receives.
pub struct RecordingMethod {
    label: String,
    balance: Balance,
    log: CallLog,
}

impl RecordingMethod {
    pub fn new(label: &str, balance: Decimal, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            balance: Balance::new(balance),
            log: log.clone(),
        }
    }
}

impl PaymentMethod for RecordingMethod {
    fn pay(&mut self, amount: Decimal) -> bool {
        self.log.borrow_mut().push(Call::Pay(self.label.clone(), amount));
        let amount = Balance::new(amount);
        if amount <= self.balance {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    fn refund(&mut self, amount: Decimal) -> bool {
        self.log.borrow_mut().push(Call::Refund(self.label.clone(), amount));
        self.balance += Balance::new(amount);
        true
    }

    fn name(&self) -> String {
        format!("Recording ({})", self.label)
    }

    fn balance(&self) -> Balance {
        self.balance
    }
}

/// A notification channel that records every `send` it receives.
pub struct RecordingChannel {
    label: String,
    priority: Priority,
    log: CallLog,
}

impl RecordingChannel {
    pub fn new(label: &str, priority: Priority, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            priority,
            log: log.clone(),
        }
    }
}

impl NotificationChannel for RecordingChannel {
    fn send(&self, _recipient: &str, _message: &str) {
        self.log.borrow_mut().push(Call::Send(self.label.clone()));
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn kind(&self) -> &str {
        "Recording"
    }
}

pub fn random_priorities(count: usize, seed: u64) -> Vec<Priority> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| match rng.gen_range(0..3u8) {
            0 => Priority::Low,
            1 => Priority::Normal,
            _ => Priority::High,
        })
        .collect()
}

/// Writes a channel roster of SMS channels whose sender encodes the
/// priority and the row index, e.g. `p2-17`.
pub fn generate_channel_roster(path: &Path, priorities: &[Priority]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["kind", "sender", "priority"])?;
    for (i, priority) in priorities.iter().enumerate() {
        wtr.write_record([
            "sms",
            &format!("p{}-{}", priority.value(), i),
            &priority.value().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a payment roster of `rows` credit cards, each funded with `balance`.
pub fn generate_payment_roster(path: &Path, rows: usize, balance: &str) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["kind", "id", "balance"])?;
    for i in 0..rows {
        wtr.write_record(["credit_card", &format!("holder-{}", i), balance])?;
    }

    wtr.flush()?;
    Ok(())
}
