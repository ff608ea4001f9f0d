//! Storage backends for the service layer
//!
//! The in-memory repository is the default backend; the sea-orm
//! repositories live next to each resource.

pub mod memory_store;
