//! Transport error mapping.
//!
//! Every failure a subscription request can produce is deterministic
//! input validation, so everything maps to a 400 with a machine-readable
//! kind and the human-readable message from the domain layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use billing_core::types::{DateError, ScheduleError};

/// Wire shape for request failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Failures surfaced by the subscription endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A textual date did not match the fixed dd/MM/yyyy format.
    ///
    /// Raised while parsing the request body, before the domain layer
    /// ever sees the date.
    DateFormat(DateError),

    /// The domain layer rejected the request.
    Schedule(ScheduleError),
}

impl ApiError {
    /// Returns the stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::DateFormat(_) => "date_format",
            ApiError::Schedule(err) => err.kind(),
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        match self {
            ApiError::DateFormat(err) => err.to_string(),
            ApiError::Schedule(err) => err.to_string(),
        }
    }
}

impl From<DateError> for ApiError {
    fn from(err: DateError) -> Self {
        ApiError::DateFormat(err)
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        ApiError::Schedule(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.message(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_error_kind_passes_through() {
        let err = ApiError::from(ScheduleError::MissingAmount);
        assert_eq!(err.kind(), "missing_amount");
        assert_eq!(err.message(), "Please input amount field.");
    }

    #[test]
    fn test_date_format_error_kind() {
        let err = ApiError::from(DateError::InvalidFormat {
            input: "2021-01-05".to_string(),
        });
        assert_eq!(err.kind(), "date_format");
        assert_eq!(err.message(), "2021-01-05 does not have dd/MM/yyyy format.");
    }

    #[tokio::test]
    async fn test_into_response_is_bad_request() {
        let response = ApiError::from(ScheduleError::InvalidDateOrder).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.error, "invalid_date_order");
        assert_eq!(parsed.message, "startDate cannot be after endDate.");
    }
}
