//! Request schema validation for items-service
//!
//! Schemas describe the fields a request body must carry. Validation
//! happens before anything reaches the store.
//!
//! # Design Principles
//!
//! - Validation precedes every write
//! - All field errors are reported together, in schema order
//! - Scalars coerce: numeric strings and booleans to floats, numbers and
//!   booleans to strings; arrays and objects never coerce
//! - `null` on an optional field means absent
//! - Undeclared fields are ignored

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationErrors};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::SchemaValidator;
