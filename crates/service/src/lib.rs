//! Business layer of the pizzeria backend.
//! - Domain records and their input validation.
//! - One service per resource over the `Repository` seam.
//! - In-memory and SeaORM repository backends.

pub mod app;
pub mod errors;
pub mod landing_page;
pub mod location;
pub mod pizza;
pub mod product;
pub mod repository;
pub mod storage;
#[cfg(test)]
pub mod test_support;
pub mod validation;

pub use app::AppServices;
pub use errors::ServiceError;
