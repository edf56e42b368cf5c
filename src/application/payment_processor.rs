use crate::domain::ports::{PaymentMethod, PaymentMethodBox};
use crate::domain::registry::Registry;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Drives every registered payment method through a charge.
///
/// The processor only sees `dyn PaymentMethod`; adding a new kind of method
/// needs no change here.
pub struct PaymentProcessor {
    methods: Registry<PaymentMethodBox>,
}

impl PaymentProcessor {
    /// Creates an empty processor with the default registry capacity.
    pub fn new() -> Self {
        Self {
            methods: Registry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            methods: Registry::with_capacity(capacity),
        }
    }

    /// Appends a method. The same shared handle may be added more than once.
    pub fn add_method(&mut self, method: PaymentMethodBox) {
        debug!(
            method = %method.name(),
            position = self.methods.len(),
            "Registering payment method"
        );
        self.methods.push(method);
    }

    /// Charges `amount` to every method in registration order.
    ///
    /// Each method that accepts the charge is immediately refunded half of it.
    /// A declined charge is not refunded.
    pub fn process_payments(&mut self, amount: Decimal) {
        let refund = amount / Decimal::TWO;
        let mut accepted = 0usize;

        for method in self.methods.iter_mut() {
            if method.pay(amount) {
                accepted += 1;
                method.refund(refund);
            } else {
                debug!(method = %method.name(), %amount, "Payment declined");
            }
        }

        info!(
            %amount,
            accepted,
            declined = self.methods.len() - accepted,
            "Processed payments"
        );
    }

    pub fn methods(&self) -> impl Iterator<Item = &dyn PaymentMethod> {
        self.methods.iter().map(|method| &**method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.methods.capacity()
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}
