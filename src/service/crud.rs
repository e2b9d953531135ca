//! Single-row CRUD against SQLite for any `Entity`.

use crate::error::AppError;
use crate::models::Entity;
use crate::sql::{self, QueryBuf};
use sqlx::sqlite::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All rows in insertion order.
    pub async fn list<E: Entity>(pool: &SqlitePool) -> Result<Vec<E>, AppError> {
        let q = sql::select_all::<E>();
        tracing::debug!(sql = %q.sql, "query");
        let rows = sqlx::query_as::<_, E>(&q.sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read<E: Entity>(pool: &SqlitePool, id: i64) -> Result<E, AppError> {
        let q = sql::select_by_id::<E>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, E>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Insert with the caller's key. An id already in use is a conflict.
    pub async fn create<E: Entity>(pool: &SqlitePool, entity: &E) -> Result<(), AppError> {
        let q = sql::insert(entity);
        if Self::execute(pool, &q).await? == 0 {
            return Err(AppError::Conflict(format!(
                "{}/{} already exists",
                E::TABLE,
                entity.id()
            )));
        }
        Ok(())
    }

    /// Overwrite every non-key column of an existing row.
    pub async fn update<E: Entity>(pool: &SqlitePool, entity: &E) -> Result<(), AppError> {
        let q = sql::update(entity);
        if Self::execute(pool, &q).await? == 0 {
            return Err(not_found::<E>(entity.id()));
        }
        Ok(())
    }

    pub async fn delete<E: Entity>(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let q = sql::delete::<E>(id);
        if Self::execute(pool, &q).await? == 0 {
            return Err(not_found::<E>(id));
        }
        Ok(())
    }

    /// Runs one statement in its own implicit transaction; returns rows affected.
    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}

fn not_found<E: Entity>(id: i64) -> AppError {
    AppError::NotFound(format!("{}/{}", E::TABLE, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Offer, User};
    use crate::store::{memory_pool, reset_schema};

    async fn pool() -> SqlitePool {
        let pool = memory_pool().await;
        reset_schema(&pool).await.unwrap();
        pool
    }

    fn user(id: i64, role: &str) -> User {
        User {
            id,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            age: 85,
            email: format!("grace{id}@example.com"),
            role: role.into(),
            phone: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn create_then_read_returns_same_row() {
        let pool = pool().await;
        let u = user(1, "customer");
        CrudService::create(&pool, &u).await.unwrap();
        let stored: User = CrudService::read(&pool, 1).await.unwrap();
        assert_eq!(stored, u);
    }

    #[tokio::test]
    async fn duplicate_id_is_conflict_and_keeps_original() {
        let pool = pool().await;
        CrudService::create(&pool, &user(1, "customer")).await.unwrap();
        let err = CrudService::create(&pool, &user(1, "executor")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        let stored: User = CrudService::read(&pool, 1).await.unwrap();
        assert_eq!(stored.role, "customer");
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let pool = pool().await;
        assert!(matches!(
            CrudService::read::<Offer>(&pool, 9).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            CrudService::update(&pool, &Offer { id: 9, order_id: 1, executor_id: 1 }).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            CrudService::delete::<Offer>(&pool, 9).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_follows_insertion_order() {
        let pool = pool().await;
        for id in [5, 2, 9] {
            CrudService::create(&pool, &user(id, "customer")).await.unwrap();
        }
        let ids: Vec<i64> = CrudService::list::<User>(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[tokio::test]
    async fn update_replaces_only_target_row() {
        let pool = pool().await;
        CrudService::create(&pool, &user(1, "customer")).await.unwrap();
        CrudService::create(&pool, &user(2, "customer")).await.unwrap();

        let mut changed = user(1, "admin");
        changed.first_name = "Amazing".into();
        CrudService::update(&pool, &changed).await.unwrap();

        assert_eq!(CrudService::read::<User>(&pool, 1).await.unwrap(), changed);
        assert_eq!(CrudService::read::<User>(&pool, 2).await.unwrap(), user(2, "customer"));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = pool().await;
        CrudService::create(&pool, &Offer { id: 1, order_id: 1, executor_id: 2 }).await.unwrap();
        CrudService::delete::<Offer>(&pool, 1).await.unwrap();
        assert!(CrudService::list::<Offer>(&pool).await.unwrap().is_empty());
    }
}
