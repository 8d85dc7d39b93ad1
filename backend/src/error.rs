use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Too many submissions, please try again shortly")]
    RateLimited,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Email must be a valid address")]
    InvalidEmail,
    #[error("Form endpoint rejected the submission ({0})")]
    UpstreamRejected(u16),
    #[error("Form endpoint unreachable: {0}")]
    UpstreamUnreachable(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RelayError::MissingField(_) | RelayError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            RelayError::UpstreamRejected(_) | RelayError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
