//! User payload validation

use serde_json::{Map, Value};

use super::{RequiredFields, ValidationError};

/// Fields required on create and update, in message order
pub const USER_FIELDS: &[&str] = &["username", "email", "password"];

/// Validated user fields from a POST or PUT body.
///
/// The password is stored as given and never serialized back out.
#[derive(Clone, PartialEq)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserInput {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let fields = RequiredFields::check(body, USER_FIELDS)?;

        Ok(Self {
            username: fields.string("username")?,
            email: fields.string("email")?,
            password: fields.string("password")?,
        })
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
