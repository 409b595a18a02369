use crate::{CoreError, OrderState, Role};

use std::str::FromStr;

#[test]
fn order_state_round_trips_through_as_str() {
    for state in [OrderState::Placed, OrderState::Paid, OrderState::Shipped] {
        assert_eq!(OrderState::from_str(state.as_str()).unwrap(), state);
    }
}

#[test]
fn unknown_order_state_is_rejected() {
    let err = OrderState::from_str("refunded").unwrap_err();
    assert!(matches!(err, CoreError::InvalidOrderState { .. }));
}

#[test]
fn unknown_role_is_rejected() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_str("superuser").unwrap_err(),
        CoreError::InvalidRole { .. }
    ));
}
