//! Item store errors

use thiserror::Error;

use super::model::ItemId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the item store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item is stored under the requested id
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

impl StoreError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "ITEMS_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "Item not found: 42");
        assert_eq!(err.code(), "ITEMS_NOT_FOUND");
    }
}
