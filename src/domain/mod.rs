//! Strategy contracts and the concrete payment methods and notification
//! channels that implement them.

pub mod money;
pub mod notification;
pub mod payment;
pub mod ports;
pub mod registry;
