//! Background reconciliation of the confirm-payment dual write.
//!
//! The confirm handler writes an outbox entry, flips the order to paid, then
//! inserts the payment record. A crash or store failure between the last two
//! steps leaves the entry pending; the sweep finishes (or abandons) it.

use crate::AppState;

use tm_core::PaymentRecord;
use tm_db::{DbError, OrderRepository, PaymentOutboxRepository, PaymentRepository};

use std::time::Duration;

use chrono::Utc;
use log::{info, warn};

/// Spawn the periodic sweep task. Entries younger than `sweep_secs` are left
/// alone so an in-flight confirm request is never raced.
pub fn spawn_sweep(state: AppState, sweep_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(sweep_secs.max(1)));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match sweep_once(&state, sweep_secs).await {
                Ok(0) => {}
                Ok(n) => info!("Outbox sweep reconciled {} payment record(s)", n),
                Err(e) => warn!("Outbox sweep failed: {}", e),
            }
        }
    });
}

/// One sweep pass over stale pending entries. Returns how many payment
/// records were reconciled.
pub async fn sweep_once(state: &AppState, stale_secs: u64) -> Result<usize, DbError> {
    let outbox = PaymentOutboxRepository::new(state.pool.clone());
    let orders = OrderRepository::new(state.pool.clone());
    let payments = PaymentRepository::new(state.pool.clone());

    let cutoff = Utc::now() - chrono::Duration::seconds(stale_secs as i64);
    let pending = outbox.find_pending(cutoff).await?;

    let mut reconciled = 0;
    for entry in pending {
        match orders.find_by_id(entry.order_id).await? {
            Some(order)
                if order.state.is_paid()
                    && order.transaction_id.as_deref() == Some(entry.transaction_id.as_str()) =>
            {
                // Insert is keyed by transaction id, so a record that already
                // landed is a no-op here.
                let record = PaymentRecord::new(
                    entry.transaction_id.clone(),
                    entry.order_id,
                    entry.email.clone(),
                    entry.amount,
                );
                payments.insert(&record).await?;
                outbox.mark_complete(entry.id).await?;

                info!(
                    "Reconciled payment record for order {} (tx {})",
                    entry.order_id, entry.transaction_id
                );
                reconciled += 1;
            }
            Some(_) => {
                // The order never reached the paid state under this
                // transaction; the confirm call did not complete.
                outbox.mark_complete(entry.id).await?;
                warn!(
                    "Abandoned stale outbox entry {} for order {}",
                    entry.id, entry.order_id
                );
            }
            None => {
                outbox.mark_complete(entry.id).await?;
                warn!(
                    "Abandoned outbox entry {} for deleted order {}",
                    entry.id, entry.order_id
                );
            }
        }
    }

    Ok(reconciled)
}
