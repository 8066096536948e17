//! Request validation for product payloads.

mod validation;
pub use validation::ProductValidator;
