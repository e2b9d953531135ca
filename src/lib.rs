//! Marketplace API: CRUD over users, orders and offers stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, SeedError};
pub use models::{Entity, Offer, Order, User};
pub use routes::{app_router, common_routes, entity_routes};
pub use seed::{seed, Fixtures};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, connect_options, reset_schema};
