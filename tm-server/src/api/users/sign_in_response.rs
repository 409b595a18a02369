use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: UserDto,
    pub token: String,
}
