use super::money::{Balance, Fixed};
use super::ports::{PaymentMethod, SinkRef};
use rust_decimal::Decimal;

/// Fractional digits shown for fiat balances.
const FIAT_PLACES: u32 = 2;
/// Fractional digits shown for the crypto wallet.
const CRYPTO_PLACES: u32 = 4;

/// Balance bookkeeping and status lines shared by every payment method.
struct Ledger {
    balance: Balance,
    places: u32,
    sink: SinkRef,
}

impl Ledger {
    fn new(balance: Balance, places: u32, sink: SinkRef) -> Self {
        Self {
            balance,
            places,
            sink,
        }
    }

    fn pay(&mut self, label: &str, amount: Decimal) -> bool {
        let amount = Balance::new(amount);
        if amount <= self.balance {
            self.balance -= amount;
            self.sink.emit(&format!(
                "{} : paid {}, remaining {}",
                label,
                amount.display(self.places),
                self.balance.display(self.places)
            ));
            true
        } else {
            self.sink.emit(&format!("{} : insufficient funds", label));
            false
        }
    }

    /// Credits `amount`. The balance saturates at `Decimal::MAX`.
    fn refund(&mut self, label: &str, amount: Decimal) -> bool {
        self.balance += Balance::new(amount);
        self.sink.emit(&format!(
            "{} : refunded {}, balance {}",
            label,
            Fixed::new(amount, self.places),
            self.balance.display(self.places)
        ));
        true
    }
}

/// Implements `PaymentMethod` for a type with a `TAG`, an identifying
/// `$id` field and a `ledger`. The name reads `<TAG> (<id>)`.
macro_rules! ledger_payment_method {
    ($method:ty, $id:ident) => {
        impl PaymentMethod for $method {
            fn pay(&mut self, amount: Decimal) -> bool {
                let label = self.name();
                self.ledger.pay(&label, amount)
            }

            fn refund(&mut self, amount: Decimal) -> bool {
                let label = self.name();
                self.ledger.refund(&label, amount)
            }

            fn name(&self) -> String {
                format!("{} ({})", Self::TAG, self.$id)
            }

            fn balance(&self) -> Balance {
                self.ledger.balance
            }
        }
    };
}

/// A card identified by its holder's name.
pub struct CreditCard {
    holder: String,
    ledger: Ledger,
}

impl CreditCard {
    pub const TAG: &'static str = "CreditCard";

    pub fn new(holder: impl Into<String>, balance: Balance, sink: SinkRef) -> Self {
        Self {
            holder: holder.into(),
            ledger: Ledger::new(balance, FIAT_PLACES, sink),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }
}

ledger_payment_method!(CreditCard, holder);

/// A PayPal account identified by its email.
pub struct PayPal {
    email: String,
    ledger: Ledger,
}

impl PayPal {
    pub const TAG: &'static str = "PayPal";

    pub fn new(email: impl Into<String>, balance: Balance, sink: SinkRef) -> Self {
        Self {
            email: email.into(),
            ledger: Ledger::new(balance, FIAT_PLACES, sink),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

ledger_payment_method!(PayPal, email);

/// A Bitcoin wallet. Amounts are shown with 4 decimals.
pub struct Bitcoin {
    wallet: String,
    ledger: Ledger,
}

impl Bitcoin {
    pub const TAG: &'static str = "Bitcoin";

    pub fn new(wallet: impl Into<String>, balance: Balance, sink: SinkRef) -> Self {
        Self {
            wallet: wallet.into(),
            ledger: Ledger::new(balance, CRYPTO_PLACES, sink),
        }
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }
}

ledger_payment_method!(Bitcoin, wallet);
