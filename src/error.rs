use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum FlatbedError {
    #[error("404 Not Found")]
    NotFound,

    #[error("500 Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for FlatbedError {
    fn into_response(self) -> axum::response::Response {
        use FlatbedError::*;

        let code = match self {
            NotFound => StatusCode::NOT_FOUND,
            Internal(ref inner) => {
                tracing::error!("Internal server error: {inner}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (code, self.to_string()).into_response()
    }
}
