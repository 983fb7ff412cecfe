//! Validation error types
//!
//! Each error names where it happened (`loc`), a human message (`msg`)
//! and a machine-readable kind (`type`). The serialized form is the
//! `detail` list of a 422 response:
//!
//! ```json
//! {"loc": ["body", "price"], "msg": "field required", "type": "value_error.missing"}
//! ```

use std::fmt;

use serde::Serialize;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Required field absent
    pub fn missing(loc: Vec<String>) -> Self {
        Self::new(loc, "field required", "value_error.missing")
    }

    /// Required field present but `null`
    pub fn none_not_allowed(loc: Vec<String>) -> Self {
        Self::new(loc, "none is not an allowed value", "type_error.none.not_allowed")
    }

    /// Expected a string
    pub fn str_type(loc: Vec<String>) -> Self {
        Self::new(loc, "str type expected", "type_error.str")
    }

    /// Expected a float, or a string that parses as one
    pub fn float_type(loc: Vec<String>) -> Self {
        Self::new(loc, "value is not a valid float", "type_error.float")
    }

    /// Expected an integer
    pub fn integer_type(loc: Vec<String>) -> Self {
        Self::new(loc, "value is not a valid integer", "type_error.integer")
    }

    /// Body is not a JSON object
    pub fn dict_type(loc: Vec<String>) -> Self {
        Self::new(loc, "value is not a valid dict", "type_error.dict")
    }

    /// Body could not be decoded as JSON
    pub fn json_decode(msg: impl Into<String>) -> Self {
        Self::new(vec!["body".to_string()], msg, "value_error.jsondecode")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.loc.join("."), self.msg, self.kind)
    }
}

/// All validation failures for one request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
