//! items-service - A small HTTP service over an in-memory item store
//!
//! Items are created with `POST /items/` and read back with
//! `GET /items/{id}`. State lives only as long as the process.

pub mod cli;
pub mod http_server;
pub mod item;
pub mod observability;
pub mod schema;
