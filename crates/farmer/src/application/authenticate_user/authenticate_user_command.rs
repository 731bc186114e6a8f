// crates/farmer/src/application/authenticate_user/authenticate_user_command.rs

use serde_json::Value;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::value_objects::PhoneNumber;

#[derive(Debug, Clone)]
pub struct AuthenticateUserCommand {
    pub phone_number: PhoneNumber,
}

impl TryFrom<Value> for AuthenticateUserCommand {
    type Error = DomainError;

    fn try_from(body: Value) -> Result<Self> {
        Ok(Self {
            phone_number: PhoneNumber::normalize_value(body.get("phoneNumber"))?,
        })
    }
}
