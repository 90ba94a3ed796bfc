use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Client input errors. Both end the request with a 400 and a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CafeError {
    #[error("unknown city")]
    InvalidCity,

    #[error("incorrect count")]
    InvalidCount,
}

impl CafeError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
