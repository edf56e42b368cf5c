use super::money::Balance;
use super::notification::Priority;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

/// Contract every payment strategy fulfils.
///
/// `pay` is the only operation that can fail, and it reports failure through
/// its return value alone. A failed `pay` leaves the balance untouched.
pub trait PaymentMethod {
    fn pay(&mut self, amount: Decimal) -> bool;
    fn refund(&mut self, amount: Decimal) -> bool;
    fn name(&self) -> String;
    fn balance(&self) -> Balance;
}

/// Contract every notification channel fulfils.
pub trait NotificationChannel {
    fn send(&self, recipient: &str, message: &str);
    fn priority(&self) -> Priority;
    fn kind(&self) -> &str;
}

/// Destination for the status lines strategies emit.
pub trait StatusSink {
    fn emit(&self, line: &str);
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;
pub type NotificationChannelBox = Box<dyn NotificationChannel>;
pub type SinkRef = Rc<dyn StatusSink>;

// Shared handles let the same instance sit in a registry more than once and
// let the caller inspect it after registration.
impl<P: PaymentMethod + ?Sized> PaymentMethod for Rc<RefCell<P>> {
    fn pay(&mut self, amount: Decimal) -> bool {
        self.borrow_mut().pay(amount)
    }

    fn refund(&mut self, amount: Decimal) -> bool {
        self.borrow_mut().refund(amount)
    }

    fn name(&self) -> String {
        self.borrow().name()
    }

    fn balance(&self) -> Balance {
        self.borrow().balance()
    }
}

impl<N: NotificationChannel + ?Sized> NotificationChannel for Rc<N> {
    fn send(&self, recipient: &str, message: &str) {
        (**self).send(recipient, message)
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}
