use super::Entity;
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl Entity for User {
    type Fields = UserFields;

    const LABEL: &'static str = "User";
    const TABLE: &'static str = "users";
    const FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "age", "email", "role", "phone"];

    fn id(&self) -> i64 {
        self.id
    }

    fn field_values(&self) -> Vec<SqlValue> {
        vec![
            (&self.first_name).into(),
            (&self.last_name).into(),
            self.age.into(),
            (&self.email).into(),
            (&self.role).into(),
            (&self.phone).into(),
        ]
    }

    fn assemble(id: i64, fields: UserFields) -> Self {
        User {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
            email: fields.email,
            role: fields.role,
            phone: fields.phone,
        }
    }
}
