use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use league_history_libs::{history::HistoryError, sleeper::client::SleeperClientError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to fetch data: {0}")]
    ClientError(#[from] SleeperClientError),
    #[error("Failed to fetch data: {0}")]
    HistoryError(#[from] HistoryError),
    #[error("Failed to fetch data: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!("request failed cause: {:?}", self);
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn upstream_errors_are_server_errors() {
        let error = ApiError::from(SleeperClientError::UnexpectedError(String::from(
            "unexpected status [502 Bad Gateway]",
        )));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Failed to fetch data: unexpected status [502 Bad Gateway]"
        );
    }

    #[test]
    fn history_errors_keep_their_message() {
        let error = ApiError::from(HistoryError::SeasonNotFound {
            league_id: String::from("784"),
            season: String::from("2015"),
        });

        assert_eq!(
            error.to_string(),
            "Failed to fetch data: season 2015 not found in history of league 784"
        );
    }

    #[test]
    fn bad_request_message_is_unchanged() {
        let error = ApiError::BadRequest(String::from("League ID is required."));

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "League ID is required.");
    }
}
