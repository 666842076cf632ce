//! AWS-oriented adapters and handlers for the order CRUD API.
//!
//! This crate owns runtime integration details (Lambda handlers, API Gateway
//! event access, configuration and the DynamoDB store adapter). Domain types
//! and the response contract live in `order_crud_core`.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod event;
pub mod handlers;
pub mod telemetry;
