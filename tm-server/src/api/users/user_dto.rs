use tm_core::UserAccount;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub profile: serde_json::Value,
    pub created_at: i64,
}

impl From<UserAccount> for UserDto {
    fn from(u: UserAccount) -> Self {
        Self {
            email: u.email,
            role: u.role.as_str().to_string(),
            name: u.name,
            profile: u.profile,
            created_at: u.created_at.timestamp(),
        }
    }
}
