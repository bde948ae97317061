//! Core business logic layer
//!
//! Record types and the storage traits the command handlers depend on.

pub mod data;
pub mod traits;
