use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crypto_core::CryptoError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorServer {
    pub message: String,
    pub status: u16,
}

impl ErrorServer {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST.into(),
        }
    }
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<QueryRejection> for ErrorServer {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            message: rejection.body_text(),
            status: rejection.status().into(),
        }
    }
}

impl From<CryptoError> for ErrorServer {
    fn from(err: CryptoError) -> Self {
        let status = match &err {
            CryptoError::NotFound(_) => StatusCode::NOT_FOUND,
            CryptoError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CryptoError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CryptoError::Transport(_) | CryptoError::MalformedResponse(_) => {
                log::error!("Upstream failure: {}", err);
                StatusCode::BAD_GATEWAY
            }
        };

        Self {
            message: err.to_string(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_error_kind() {
        let cases = [
            (CryptoError::NotFound("gone".to_string()), 404),
            (
                CryptoError::InsufficientData {
                    needed: 15,
                    available: 2,
                },
                422,
            ),
            (CryptoError::InvalidArgument("bad".to_string()), 400),
            (CryptoError::Transport("refused".to_string()), 502),
            (CryptoError::MalformedResponse("missing".to_string()), 502),
        ];

        for (err, status) in cases {
            assert_eq!(ErrorServer::from(err).status, status);
        }
    }
}
