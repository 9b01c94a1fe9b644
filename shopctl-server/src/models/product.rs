//! Product payload validation

use serde_json::{Map, Value};

use super::{RequiredFields, ValidationError};

/// Fields required on create and update, in message order
pub const PRODUCT_FIELDS: &[&str] = &["name", "description", "price", "stock_quantity"];

/// Validated product fields from a POST or PUT body
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
}

impl ProductInput {
    /// Validate a JSON object body.
    ///
    /// # Rules
    /// - All of `name`, `description`, `price`, `stock_quantity` present
    /// - `name`/`description` non-empty strings
    /// - `price` any number (zero allowed), `stock_quantity` an integer
    ///
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use shopctl_server::models::ProductInput;
    ///
    /// let body = json!({ "name": "Pen", "description": "Blue ink", "price": 1.5, "stock_quantity": 100 });
    /// assert!(ProductInput::from_body(body.as_object().unwrap()).is_ok());
    ///
    /// let body = json!({ "name": "Pen" });
    /// assert!(ProductInput::from_body(body.as_object().unwrap()).is_err());
    /// ```
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let fields = RequiredFields::check(body, PRODUCT_FIELDS)?;

        Ok(Self {
            name: fields.string("name")?,
            description: fields.string("description")?,
            price: fields.number("price")?,
            stock_quantity: fields.integer("stock_quantity")?,
        })
    }
}
