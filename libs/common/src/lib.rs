//! Shared storage plumbing for the users service
//!
//! This crate owns PostgreSQL connectivity: pool configuration, schema
//! migrations, health checks and the error type repository adapters wrap.

pub mod database;
pub mod error;
