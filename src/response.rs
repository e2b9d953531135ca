//! Plain-text confirmations returned by the write endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

/// `"<Label> created"` and friends, e.g. "Order deleted".
#[derive(Debug)]
pub struct Confirmation {
    pub label: &'static str,
    pub action: Action,
}

impl Confirmation {
    pub fn new(label: &'static str, action: Action) -> Self {
        Confirmation { label, action }
    }

    pub fn message(&self) -> String {
        let verb = match self.action {
            Action::Created => "created",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        };
        format!("{} {}", self.label, verb)
    }
}

impl IntoResponse for Confirmation {
    fn into_response(self) -> Response {
        let status = match self.action {
            Action::Created => StatusCode::CREATED,
            Action::Updated | Action::Deleted => StatusCode::OK,
        };
        (status, self.message()).into_response()
    }
}
