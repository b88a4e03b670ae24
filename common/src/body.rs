//! Response bodies.
//!
//! Handlers assign a value to the response body and the status code follows
//! from what was assigned: strings are sent as text, other JSON values as
//! JSON, null as `204 No Content`, and a body that was never assigned falls
//! through to `404 Not Found`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseBody {
    /// The handler finished without assigning a body.
    #[default]
    Unset,
    /// A null or missing value was assigned.
    Empty,
    Text(String),
    Json(Value),
}

impl ResponseBody {
    pub fn text(text: impl Into<String>) -> Self {
        ResponseBody::Text(text.into())
    }

    /// Map an opaque value onto a body the way the router serializes it.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => ResponseBody::Empty,
            Value::String(text) => ResponseBody::Text(text),
            other => ResponseBody::Json(other),
        }
    }

    pub fn from_optional(value: Option<Value>) -> Self {
        value.map(Self::from_value).unwrap_or(ResponseBody::Empty)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ResponseBody::Unset => StatusCode::NOT_FOUND,
            ResponseBody::Empty => StatusCode::NO_CONTENT,
            ResponseBody::Text(_) | ResponseBody::Json(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ResponseBody::Unset => {
                (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], "Not Found").into_response()
            }
            ResponseBody::Empty => status.into_response(),
            ResponseBody::Text(text) => {
                (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], text).into_response()
            }
            ResponseBody::Json(value) => (
                status,
                [(header::CONTENT_TYPE, APPLICATION_JSON)],
                value.to_string(),
            )
                .into_response(),
        }
    }
}
