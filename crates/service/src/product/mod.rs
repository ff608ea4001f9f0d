//! Catalogue products (drinks, sides, desserts and pizzas sold as items).

pub mod domain;
pub mod seaorm;
pub mod service;

pub use domain::{CreateProduct, Product, UpdateProduct};
pub use service::ProductService;
