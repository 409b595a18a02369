use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IntentResponse {
    pub client_secret: String,
}
