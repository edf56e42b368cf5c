//! Application layer: the managers that own registered strategies and drive
//! them through their contracts.
//!
//! `PaymentProcessor` charges methods in registration order and refunds half
//! of every accepted charge. `NotificationManager` broadcasts over channels by
//! descending priority.

pub mod notification_manager;
pub mod payment_processor;
