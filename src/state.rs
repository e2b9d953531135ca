//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; handlers receive it through `State`.
    pub pool: SqlitePool,
}
