//! Helpers shared by the binary and the HTTP layer.

pub mod types;
pub mod utils;
