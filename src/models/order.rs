use super::Entity;
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dates are kept as the text the client sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderFields {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl Entity for Order {
    type Fields = OrderFields;

    const LABEL: &'static str = "Order";
    const TABLE: &'static str = "orders";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "start_date",
        "end_date",
        "address",
        "price",
        "customer_id",
        "executor_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            (&self.name).into(),
            (&self.description).into(),
            (&self.start_date).into(),
            (&self.end_date).into(),
            (&self.address).into(),
            self.price.into(),
            self.customer_id.into(),
            self.executor_id.into(),
        ]
    }

    fn assemble(id: i64, fields: OrderFields) -> Self {
        Order {
            id,
            name: fields.name,
            description: fields.description,
            start_date: fields.start_date,
            end_date: fields.end_date,
            address: fields.address,
            price: fields.price,
            customer_id: fields.customer_id,
            executor_id: fields.executor_id,
        }
    }
}
