use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cell::RefCell;
use std::rc::Rc;
use tp_strategies::application::payment_processor::PaymentProcessor;
use tp_strategies::domain::money::Balance;
use tp_strategies::domain::payment::{Bitcoin, CreditCard, PayPal};
use tp_strategies::domain::ports::{PaymentMethod, PaymentMethodBox, SinkRef};
use tp_strategies::infrastructure::sink::InMemorySink;

fn every_kind(balance: Decimal, sink: &SinkRef) -> Vec<PaymentMethodBox> {
    let mut methods: Vec<PaymentMethodBox> = Vec::new();
    methods.push(Box::new(CreditCard::new("Alice", Balance::new(balance), sink.clone())));
    methods.push(Box::new(PayPal::new("alice@mail.com", Balance::new(balance), sink.clone())));
    methods.push(Box::new(Bitcoin::new("wallet", Balance::new(balance), sink.clone())));
    methods
}

#[test]
fn test_demo_scenario_balances() {
    let sink = InMemorySink::new();
    let shared: SinkRef = Rc::new(sink.clone());

    let card = Rc::new(RefCell::new(CreditCard::new(
        "Alice",
        Balance::new(dec!(500)),
        shared.clone(),
    )));
    let paypal = Rc::new(RefCell::new(PayPal::new(
        "alice@mail.com",
        Balance::new(dec!(200)),
        shared.clone(),
    )));
    let bitcoin = Rc::new(RefCell::new(Bitcoin::new(
        "wallet",
        Balance::new(dec!(0.10)),
        shared,
    )));

    let mut processor = PaymentProcessor::new();
    processor.add_method(Box::new(card.clone()));
    processor.add_method(Box::new(paypal.clone()));
    processor.add_method(Box::new(bitcoin.clone()));
    processor.process_payments(dec!(100.0));

    assert_eq!(card.borrow().balance(), Balance::new(dec!(450)));
    assert_eq!(paypal.borrow().balance(), Balance::new(dec!(150)));
    assert_eq!(bitcoin.borrow().balance(), Balance::new(dec!(0.10)));

    let lines = sink.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "Bitcoin (wallet) : insufficient funds");
    assert!(!lines.iter().any(|l| l.starts_with("Bitcoin (wallet) : refunded")));
}

#[test]
fn test_pay_debits_only_when_covered() {
    let shared: SinkRef = Rc::new(InMemorySink::new());
    let amounts = [dec!(0.01), dec!(49.99), dec!(50), dec!(50.01), dec!(1000)];

    for amount in amounts {
        for mut method in every_kind(dec!(50), &shared) {
            let before = method.balance();
            let accepted = method.pay(amount);
            let after = method.balance();

            if Balance::new(amount) <= before {
                assert!(accepted, "{} should accept {}", method.name(), amount);
                assert_eq!(after, before - Balance::new(amount));
            } else {
                assert!(!accepted, "{} should decline {}", method.name(), amount);
                assert_eq!(after, before);
            }
        }
    }
}

#[test]
fn test_refund_always_credits() {
    let shared: SinkRef = Rc::new(InMemorySink::new());

    for amount in [dec!(0), dec!(0.0001), dec!(75), dec!(1000000)] {
        for mut method in every_kind(dec!(10), &shared) {
            let before = method.balance();
            assert!(method.refund(amount));
            assert_eq!(method.balance(), before + Balance::new(amount));
        }
    }
}

#[test]
fn test_many_registrations_past_initial_capacity() {
    let shared: SinkRef = Rc::new(InMemorySink::new());
    let mut processor = PaymentProcessor::new();
    assert_eq!(processor.capacity(), 3);

    for i in 0..50 {
        processor.add_method(Box::new(CreditCard::new(
            format!("holder-{}", i),
            Balance::new(dec!(1)),
            shared.clone(),
        )));
    }

    assert_eq!(processor.len(), 50);
    assert_eq!(processor.capacity(), 96);
    let names: Vec<String> = processor.methods().map(|m| m.name()).collect();
    assert_eq!(names[0], "CreditCard (holder-0)");
    assert_eq!(names[49], "CreditCard (holder-49)");
}

#[test]
fn test_status_line_formats() {
    let sink = InMemorySink::new();
    let shared: SinkRef = Rc::new(sink.clone());

    let mut paypal = PayPal::new("bob@mail.com", Balance::new(dec!(20)), shared.clone());
    paypal.pay(dec!(12.345));
    paypal.refund(dec!(0.5));

    let mut bitcoin = Bitcoin::new("bc1q", Balance::new(dec!(1)), shared);
    bitcoin.pay(dec!(0.12345));
    bitcoin.refund(dec!(0.00005));

    assert_eq!(
        sink.lines(),
        vec![
            "PayPal (bob@mail.com) : paid 12.35, remaining 7.66",
            "PayPal (bob@mail.com) : refunded 0.50, balance 8.16",
            "Bitcoin (bc1q) : paid 0.1235, remaining 0.8766",
            "Bitcoin (bc1q) : refunded 0.0001, balance 0.8766",
        ]
    );
}
