use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}
