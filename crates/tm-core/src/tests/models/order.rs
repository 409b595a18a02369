use crate::{CoreError, Order, OrderState};

use uuid::Uuid;

fn placed_order() -> Order {
    Order::new("a@x.com".to_string(), Uuid::new_v4(), 1, 50.0)
}

#[test]
fn new_order_starts_placed_without_transaction() {
    let order = placed_order();

    assert_eq!(order.state, OrderState::Placed);
    assert!(order.transaction_id.is_none());
    assert!(!order.is_paid());
    assert!(!order.is_shipping());
}

#[test]
fn pay_moves_placed_to_paid_and_records_transaction() {
    let mut order = placed_order();

    order.pay("tx1".to_string()).unwrap();

    assert_eq!(order.state, OrderState::Paid);
    assert_eq!(order.transaction_id.as_deref(), Some("tx1"));
    assert!(order.is_paid());
}

#[test]
fn pay_twice_is_rejected() {
    let mut order = placed_order();
    order.pay("tx1".to_string()).unwrap();

    let err = order.pay("tx2".to_string()).unwrap_err();

    assert!(matches!(
        err,
        CoreError::InvalidTransition {
            from: OrderState::Paid,
            to: OrderState::Paid,
            ..
        }
    ));
    // First transaction id is untouched.
    assert_eq!(order.transaction_id.as_deref(), Some("tx1"));
}

#[test]
fn ship_requires_payment() {
    let mut order = placed_order();

    let err = order.ship().unwrap_err();

    assert!(matches!(
        err,
        CoreError::InvalidTransition {
            from: OrderState::Placed,
            to: OrderState::Shipped,
            ..
        }
    ));
    assert_eq!(order.state, OrderState::Placed);
}

#[test]
fn ship_after_payment_then_again_is_noop() {
    let mut order = placed_order();
    order.pay("tx1".to_string()).unwrap();

    assert!(order.ship().unwrap());
    assert_eq!(order.state, OrderState::Shipped);

    // Second ship is an idempotent no-op success.
    assert!(!order.ship().unwrap());
    assert_eq!(order.state, OrderState::Shipped);
}

#[test]
fn shipped_order_still_counts_as_paid() {
    let mut order = placed_order();
    order.pay("tx1".to_string()).unwrap();
    order.ship().unwrap();

    assert!(order.is_paid());
    assert!(order.is_shipping());
    assert!(order.transaction_id.is_some());
}

#[test]
fn ownership_is_an_exact_email_match() {
    let order = placed_order();

    assert!(order.is_owned_by("a@x.com"));
    assert!(!order.is_owned_by("b@y.com"));
}
