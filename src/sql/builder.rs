//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for an entity table.
//! Identifiers come from `Entity` constants only; values are always parameters.

use crate::models::Entity;
use crate::sql::SqlValue;

/// Quote identifier for SQLite.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }
}

fn column_list<E: Entity>() -> String {
    std::iter::once(E::KEY)
        .chain(E::FIELDS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT all rows in insertion order.
pub fn select_all<E: Entity>() -> QueryBuf {
    QueryBuf::new(format!(
        "SELECT {} FROM {} ORDER BY rowid",
        column_list::<E>(),
        quoted(E::TABLE)
    ))
}

/// SELECT by primary key. Caller binds the id as the sole param.
pub fn select_by_id<E: Entity>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::KEY)
    ));
    q.params.push(SqlValue::Int(id));
    q
}

/// INSERT with caller-supplied key. An existing key leaves the table untouched
/// (zero rows affected) so the caller can report a conflict.
pub fn insert<E: Entity>(entity: &E) -> QueryBuf {
    let placeholders = vec!["?"; E::FIELDS.len() + 1].join(", ");
    let mut q = QueryBuf::new(format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT({}) DO NOTHING",
        quoted(E::TABLE),
        column_list::<E>(),
        placeholders,
        quoted(E::KEY)
    ));
    q.params.push(SqlValue::Int(entity.id()));
    q.params.extend(entity.field_values());
    q
}

/// UPDATE every non-key column of the row with the entity's key.
pub fn update<E: Entity>(entity: &E) -> QueryBuf {
    let set_clause = E::FIELDS
        .iter()
        .map(|f| format!("{} = ?", quoted(f)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut q = QueryBuf::new(format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(E::TABLE),
        set_clause,
        quoted(E::KEY)
    ));
    q.params.extend(entity.field_values());
    q.params.push(SqlValue::Int(entity.id()));
    q
}

/// DELETE by primary key.
pub fn delete<E: Entity>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(E::TABLE),
        quoted(E::KEY)
    ));
    q.params.push(SqlValue::Int(id));
    q
}
