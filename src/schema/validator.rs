//! Schema validator for request bodies
//!
//! Validation semantics:
//! - The body is a JSON object
//! - All required fields are present and non-null
//! - String fields hold JSON strings; numbers become their decimal text
//!   and booleans become `True` / `False`
//! - Float fields hold numbers, booleans (1.0 / 0.0), or strings that
//!   parse as a finite float
//!
//! Validation does not mutate its input. It returns a normalized copy
//! holding only declared fields, with coerced values and with `null`
//! optional fields removed.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationErrors};
use super::types::{FieldType, Schema};
use crate::item::Item;

/// Location prefix for body fields
const BODY: &str = "body";

/// Schema validator that enforces schema rules on request bodies.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a body and returns its normalized form.
    ///
    /// # Errors
    ///
    /// Returns every field failure found, in schema declaration order.
    pub fn validate(&self, body: &Value) -> Result<Map<String, Value>, ValidationErrors> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::dict_type(vec![BODY.to_string()]))?;

        let mut errors = ValidationErrors::new();
        let mut normalized = Map::new();

        for (field_name, field_def) in &self.schema.fields {
            let loc = vec![BODY.to_string(), field_name.clone()];

            match obj.get(field_name) {
                None if field_def.required => errors.push(ValidationError::missing(loc)),
                None => {}
                Some(Value::Null) if field_def.required => {
                    errors.push(ValidationError::none_not_allowed(loc))
                }
                Some(Value::Null) => {}
                Some(value) => match coerce(value, field_def.field_type) {
                    Some(coerced) => {
                        normalized.insert(field_name.clone(), coerced);
                    }
                    None => errors.push(type_error(field_def.field_type, loc)),
                },
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }

    /// Validates a body against the item schema and builds the [`Item`].
    pub fn validate_item(body: &Value) -> Result<Item, ValidationErrors> {
        let schema = Schema::item();
        let normalized = SchemaValidator::new(&schema).validate(body)?;

        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationErrors::from(ValidationError::json_decode(e.to_string())))
    }
}

/// Coerces a non-null value to the expected type, if possible.
fn coerce(value: &Value, expected: FieldType) -> Option<Value> {
    match expected {
        FieldType::String => match value {
            Value::String(_) => Some(value.clone()),
            Value::Number(n) => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(if *b { "True" } else { "False" }.to_string())),
            _ => None,
        },
        FieldType::Float => {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                _ => None,
            }?;
            // Non-finite values have no JSON representation.
            serde_json::Number::from_f64(parsed).map(Value::Number)
        }
    }
}

fn type_error(expected: FieldType, loc: Vec<String>) -> ValidationError {
    match expected {
        FieldType::String => ValidationError::str_type(loc),
        FieldType::Float => ValidationError::float_type(loc),
    }
}
