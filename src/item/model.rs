//! Item records

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = i64;

/// Item fields as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    /// Create an item without a description
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An item together with the id it was stored under
///
/// This is the wire shape of every successful item response:
/// `{"id", "name", "description", "price"}`, with `description`
/// rendered as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl StoredItem {
    pub fn new(id: ItemId, item: Item) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}
