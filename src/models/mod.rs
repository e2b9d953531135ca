//! Record types served by the API and the `Entity` seam the store and handlers share.

mod offer;
mod order;
mod user;

pub use offer::{Offer, OfferFields};
pub use order::{Order, OrderFields};
pub use user::{User, UserFields};

use crate::sql::SqlValue;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// A flat record stored in one table and keyed by a caller-supplied integer id.
///
/// `Fields` is the PUT payload: every column except the key. Column order in
/// `FIELDS` must match `field_values` and the serialized field order.
pub trait Entity:
    Serialize + DeserializeOwned + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static
{
    type Fields: DeserializeOwned + Send + 'static;

    /// Singular name used in confirmation messages, e.g. "User".
    const LABEL: &'static str;
    const TABLE: &'static str;
    const KEY: &'static str = "id";
    const FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    fn field_values(&self) -> Vec<SqlValue>;

    /// Full replacement row from a path id and a PUT payload.
    fn assemble(id: i64, fields: Self::Fields) -> Self;
}
