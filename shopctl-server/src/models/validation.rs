//! Validation error types and required-field extraction from JSON bodies

use std::fmt;

use serde_json::{Map, Value};

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one required field is absent, null, or an empty string.
    /// Carries the full required set, which is what the message lists.
    MissingFields { required: &'static [&'static str] },

    /// Field is present but has the wrong JSON type
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// String field contains a NUL character, which PostgreSQL TEXT rejects
    ContainsNul { field: &'static str },

    /// Body could not be parsed as JSON
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { required } => {
                let verb = if required.len() == 1 { "is" } else { "are" };
                write!(f, "{} {} required.", field_list(required), verb)
            }
            Self::InvalidType { field, expected } => write!(f, "{} must be {}.", field, expected),
            Self::ContainsNul { field } => write!(f, "{} must not contain NUL characters.", field),
            Self::MalformedBody => write!(f, "Malformed JSON body."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// "a", "a and b", "a, b, and c" with the first letter capitalized.
fn field_list(fields: &[&str]) -> String {
    let joined = match fields {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    };

    let mut chars = joined.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => joined,
    }
}

/// Present means: key exists, not null, and not an empty string.
/// Numeric zero and `false` count as present.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// A JSON object whose required fields have all been checked for presence.
///
/// Typed accessors then enforce the expected JSON kind per field.
pub struct RequiredFields<'a> {
    body: &'a Map<String, Value>,
}

impl<'a> RequiredFields<'a> {
    /// Check that every field in `required` is present.
    ///
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use shopctl_server::models::RequiredFields;
    ///
    /// let body = json!({ "a": "x", "b": 0 });
    /// let map = body.as_object().unwrap();
    /// assert!(RequiredFields::check(map, &["a", "b"]).is_ok());
    /// assert!(RequiredFields::check(map, &["a", "c"]).is_err());
    /// ```
    pub fn check(
        body: &'a Map<String, Value>,
        required: &'static [&'static str],
    ) -> Result<Self, ValidationError> {
        if required.iter().any(|field| is_missing(body.get(*field))) {
            return Err(ValidationError::MissingFields { required });
        }
        Ok(Self { body })
    }

    /// Non-empty string field without NUL characters.
    pub fn string(&self, field: &'static str) -> Result<String, ValidationError> {
        match self.body.get(field) {
            Some(Value::String(s)) if s.contains('\0') => {
                Err(ValidationError::ContainsNul { field })
            }
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(ValidationError::InvalidType {
                field,
                expected: "a string",
            }),
        }
    }

    /// Any JSON number.
    pub fn number(&self, field: &'static str) -> Result<f64, ValidationError> {
        self.body
            .get(field)
            .and_then(Value::as_f64)
            .ok_or(ValidationError::InvalidType {
                field,
                expected: "a number",
            })
    }

    /// JSON number without a fractional part that fits in an i64.
    pub fn integer(&self, field: &'static str) -> Result<i64, ValidationError> {
        self.body
            .get(field)
            .and_then(Value::as_i64)
            .ok_or(ValidationError::InvalidType {
                field,
                expected: "an integer",
            })
    }
}
