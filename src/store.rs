//! SQLite connection setup and table DDL for users, orders and offers.
//!
//! The `id` columns are declared `BIGINT PRIMARY KEY` rather than `INTEGER`
//! so they do not alias `rowid`; `rowid` then tracks insertion order, which
//! collection reads sort by. `REFERENCES` clauses are descriptive only:
//! foreign-key enforcement is switched off on every connection.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS offers",
    "DROP TABLE IF EXISTS orders",
    "DROP TABLE IF EXISTS users",
];

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE users (
        id BIGINT PRIMARY KEY NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        age INTEGER NOT NULL,
        email TEXT NOT NULL,
        role TEXT NOT NULL,
        phone TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE orders (
        id BIGINT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        address TEXT NOT NULL,
        price INTEGER NOT NULL,
        customer_id INTEGER NOT NULL REFERENCES users(id),
        executor_id INTEGER NOT NULL REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE offers (
        id BIGINT PRIMARY KEY NOT NULL,
        order_id INTEGER NOT NULL REFERENCES orders(id),
        executor_id INTEGER NOT NULL REFERENCES users(id)
    )
    "#,
];

/// Connect options for `database_url`: the file is created when missing and
/// foreign keys are not enforced.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false))
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = connect_options(database_url)?;
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Drop and recreate all tables. Existing rows are lost.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for sql in DROP_TABLES.iter().chain(CREATE_TABLES) {
        tracing::debug!(sql = %sql.trim(), "schema");
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

/// Single-connection in-memory pool for tests; the database lives as long as
/// the connection does.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options("sqlite::memory:").unwrap())
        .await
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reset_schema_clears_rows() {
        let pool = memory_pool().await;
        reset_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO offers (id, order_id, executor_id) VALUES (1, 2, 3)")
            .execute(&pool)
            .await
            .unwrap();

        reset_schema(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn dangling_references_are_accepted() {
        let pool = memory_pool().await;
        reset_schema(&pool).await.unwrap();
        let result = sqlx::query("INSERT INTO offers (id, order_id, executor_id) VALUES (1, 404, 405)")
            .execute(&pool)
            .await;
        assert!(result.is_ok());
    }
}
