//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when the request body lacks a usable concentration map
pub const INVALID_CONCENTRATIONS_MESSAGE: &str = "Invalid input: heavyMetalConcentrations is required and should be an object with metal concentrations.";

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// `heavyMetalConcentrations` is missing, empty, or not an object
    #[error("{}", INVALID_CONCENTRATIONS_MESSAGE)]
    InvalidConcentrations,

    /// The index calculator rejected the input or failed
    #[error("Calculation failed: {0}")]
    Calculation(#[from] crate::hmpi::CalculationError),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidConcentrations => StatusCode::BAD_REQUEST,
            AppError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    /// Server errors get the generic status text; details stay in the logs
    pub fn client_message(&self) -> String {
        let status = self.status_code();
        if status.is_server_error() {
            status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmpi::CalculationError;

    #[test]
    fn test_invalid_concentrations_message() {
        let err = AppError::InvalidConcentrations;
        assert_eq!(err.to_string(), INVALID_CONCENTRATIONS_MESSAGE);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_calculation_error_is_server_error() {
        let err = AppError::from(CalculationError::NonNumeric("lead".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Calculation failed: concentration for 'lead' is not a number"
        );
    }

    #[test]
    fn test_client_message_hides_calculation_detail() {
        let err = AppError::from(CalculationError::NegativeConcentration {
            metal: "lead".to_string(),
            value: -1.0,
        });
        assert_eq!(err.client_message(), "Internal Server Error");

        let err = AppError::InvalidConcentrations;
        assert_eq!(err.client_message(), INVALID_CONCENTRATIONS_MESSAGE);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidConcentrations.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(CalculationError::NoRecognisedMetals(vec![])).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
