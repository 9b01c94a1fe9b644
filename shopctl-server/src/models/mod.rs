//! Request models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod resource;
pub mod product;
pub mod user;

pub use validation::{RequiredFields, ValidationError};
pub use resource::{Lookup, Mutation, Operation, Resource};
pub use product::{ProductInput, PRODUCT_FIELDS};
pub use user::{UserInput, USER_FIELDS};
