use super::Entity;
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OfferFields {
    pub order_id: i64,
    pub executor_id: i64,
}

impl Entity for Offer {
    type Fields = OfferFields;

    const LABEL: &'static str = "Offer";
    const TABLE: &'static str = "offers";
    const FIELDS: &'static [&'static str] = &["order_id", "executor_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![self.order_id.into(), self.executor_id.into()]
    }

    fn assemble(id: i64, fields: OfferFields) -> Self {
        Offer {
            id,
            order_id: fields.order_id,
            executor_id: fields.executor_id,
        }
    }
}
