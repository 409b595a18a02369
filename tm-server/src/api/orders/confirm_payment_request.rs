use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub transaction_id: String,
}
