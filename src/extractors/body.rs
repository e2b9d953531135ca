//! JSON request body that is parsed regardless of `Content-Type` and reports
//! problems as `AppError` instead of axum's plain-text rejections.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))?;
        // serde also maps a JSON array onto struct fields positionally
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        let parsed = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))?;
        Ok(JsonBody(parsed))
    }
}
