use crate::models::order_state::OrderState;
use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchase of one tool by one account.
///
/// Invariant: `transaction_id` is `Some` exactly when `state.is_paid()`.
/// Both fields change together inside `pay`; nothing else writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Owner, by account email (weak reference, not cascaded).
    pub email: String,
    pub tool_id: Uuid,
    pub quantity: i64,
    pub price: f64,
    pub state: OrderState,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(email: String, tool_id: Uuid, quantity: i64, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            tool_id,
            quantity,
            price,
            state: OrderState::Placed,
            transaction_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.state.is_paid()
    }

    pub fn is_shipping(&self) -> bool {
        self.state.is_shipping()
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.email == email
    }

    /// Placed -> Paid. Records the transaction id with the state change.
    #[track_caller]
    pub fn pay(&mut self, transaction_id: String) -> Result<()> {
        if self.state != OrderState::Placed {
            return Err(CoreError::InvalidTransition {
                from: self.state,
                to: OrderState::Paid,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.state = OrderState::Paid;
        self.transaction_id = Some(transaction_id);
        Ok(())
    }

    /// Paid -> Shipped. Returns `false` (no-op) when already shipped;
    /// rejects shipping an order that was never paid.
    #[track_caller]
    pub fn ship(&mut self) -> Result<bool> {
        match self.state {
            OrderState::Paid => {
                self.state = OrderState::Shipped;
                Ok(true)
            }
            OrderState::Shipped => Ok(false),
            from => Err(CoreError::InvalidTransition {
                from,
                to: OrderState::Shipped,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
