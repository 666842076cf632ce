//! Order CRUD domain primitives.
//!
//! This crate owns the order record, the response contract and the store
//! abstraction. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod order;
pub mod response;
pub mod store;
