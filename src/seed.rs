//! Startup fixtures: load `users.json`, `orders.json`, `offers.json` and
//! reseed the store from them. Any failure here is fatal to startup.

use crate::error::SeedError;
use crate::models::{Entity, Offer, Order, User};
use crate::service::CrudService;
use crate::store::reset_schema;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;
use std::path::Path;

/// The three fixture arrays, in file order.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub offers: Vec<Offer>,
}

impl Fixtures {
    pub async fn load(dir: &Path) -> Result<Self, SeedError> {
        Ok(Fixtures {
            users: load_array(&dir.join("users.json")).await?,
            orders: load_array(&dir.join("orders.json")).await?,
            offers: load_array(&dir.join("offers.json")).await?,
        })
    }
}

async fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Drop and recreate the tables, then insert every fixture row one at a time.
pub async fn seed(pool: &SqlitePool, fixtures: &Fixtures) -> Result<(), SeedError> {
    reset_schema(pool).await?;
    insert_all(pool, &fixtures.users).await?;
    insert_all(pool, &fixtures.orders).await?;
    insert_all(pool, &fixtures.offers).await?;
    Ok(())
}

async fn insert_all<E: Entity>(pool: &SqlitePool, rows: &[E]) -> Result<(), SeedError> {
    for row in rows {
        CrudService::create(pool, row)
            .await
            .map_err(|source| SeedError::Insert {
                table: E::TABLE,
                source,
            })?;
    }
    tracing::info!(table = E::TABLE, count = rows.len(), "seeded");
    Ok(())
}
