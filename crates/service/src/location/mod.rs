//! Pizzeria locations: street address plus coordinates.

pub mod domain;
pub mod seaorm;
pub mod service;

pub use domain::{CreateLocation, Location, UpdateLocation};
pub use service::LocationService;
