//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - float: 64-bit floating point

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit floating point
    Float,
}

/// Field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self {
            field_type: FieldType::Float,
            required: true,
        }
    }
}

/// Ordered set of named fields
///
/// Order matters: validation errors are reported in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<(String, FieldDef)>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<(String, FieldDef)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The item body schema: `name`, `description?`, `price`
    pub fn item() -> Self {
        Self::new(
            "Item",
            vec![
                ("name".to_string(), FieldDef::required_string()),
                ("description".to_string(), FieldDef::optional_string()),
                ("price".to_string(), FieldDef::required_float()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_schema_fields() {
        let schema = Schema::item();
        assert_eq!(
            schema.fields,
            vec![
                ("name".to_string(), FieldDef::required_string()),
                ("description".to_string(), FieldDef::optional_string()),
                ("price".to_string(), FieldDef::required_float()),
            ]
        );
        assert_eq!(schema.name, "Item");
    }

    #[test]
    fn test_only_description_is_optional() {
        let schema = Schema::item();
        let optional: Vec<&str> = schema
            .fields
            .iter()
            .filter(|(_, def)| !def.required)
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(optional, ["description"]);
    }
}
