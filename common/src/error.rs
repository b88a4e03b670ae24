//! Default error path for handler failures that are not intercepted.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::body::{ResponseBody, TEXT_PLAIN};

pub type HandlerResult = Result<ResponseBody, HandlerError>;

/// A failure propagated out of a handler. Rendered as a bare 500.
#[derive(Debug)]
pub struct HandlerError(anyhow::Error);

impl<E> From<E> for HandlerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        HandlerError(err.into())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!("Unhandled handler error: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            "Internal Server Error",
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_is_500() {
        let err = HandlerError::from(anyhow::anyhow!("connection reset"));
        assert_eq!(err.0.to_string(), "connection reset");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
