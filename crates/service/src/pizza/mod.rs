//! Pizza menu entries.

pub mod domain;
pub mod seaorm;
pub mod service;

pub use domain::{CreatePizza, Pizza, UpdatePizza};
pub use service::PizzaService;
