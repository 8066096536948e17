//! Product inventory: REST resource API over a single-table product store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{NewProduct, Product, ProductInput};
pub use response::{Envelope, HealthBody, NextId};
pub use routes::{api_routes, app};
pub use state::AppState;
pub use store::{ProductStore, SqliteStore};
