use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub name: Option<String>,
    pub profile: Option<serde_json::Value>,
}
