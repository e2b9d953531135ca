//! Entity CRUD handlers: list, create, read, update, delete.
//! Generic over `Entity`; the route table instantiates them once per resource.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::Entity;
use crate::response::{Action, Confirmation};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// Digits with an optional leading `-`; `i64::from_str` alone would also take `+5`.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let invalid = || AppError::BadRequest(format!("invalid id '{}'", id_str));
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    id_str.parse().map_err(|_| invalid())
}

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError> {
    let rows = CrudService::list::<E>(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    JsonBody(entity): JsonBody<E>,
) -> Result<Confirmation, AppError> {
    CrudService::create(&state.pool, &entity).await?;
    tracing::info!(table = E::TABLE, id = entity.id(), "created");
    Ok(Confirmation::new(E::LABEL, Action::Created))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<E>, AppError> {
    let id = parse_id(&id_str)?;
    let row = CrudService::read::<E>(&state.pool, id).await?;
    Ok(Json(row))
}

/// Full replacement. The path id wins over any `id` in the body.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(fields): JsonBody<E::Fields>,
) -> Result<Confirmation, AppError> {
    let id = parse_id(&id_str)?;
    let entity = E::assemble(id, fields);
    CrudService::update(&state.pool, &entity).await?;
    tracing::info!(table = E::TABLE, id, "updated");
    Ok(Confirmation::new(E::LABEL, Action::Updated))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Confirmation, AppError> {
    let id = parse_id(&id_str)?;
    CrudService::delete::<E>(&state.pool, id).await?;
    tracing::info!(table = E::TABLE, id, "deleted");
    Ok(Confirmation::new(E::LABEL, Action::Deleted))
}
