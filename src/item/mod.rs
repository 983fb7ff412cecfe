//! Item domain for items-service
//!
//! An item is a named, priced record with an optional description.
//! Items live in an [`ItemStore`] for the lifetime of the process.
//!
//! # Invariants
//!
//! - Ids are assigned by the store, never by the client
//! - The n-th created item receives id n
//! - Items are immutable once stored

mod errors;
mod model;
mod store;

pub use errors::{StoreError, StoreResult};
pub use model::{Item, ItemId, StoredItem};
pub use store::ItemStore;
