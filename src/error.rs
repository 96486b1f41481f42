use actix_web::http::{header, Method, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::predictor::PredictError;

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body is not a JSON object: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    InvalidParameter(#[from] PredictError),

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    Payload(String),

    #[error("method {0} is not allowed")]
    MethodNotAllowed(Method),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::InvalidParameter(PredictError::MissingParameter(_)) => "missing_parameter",
            ApiError::InvalidParameter(PredictError::MalformedParameter { .. }) => {
                "malformed_parameter"
            }
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
            ApiError::Payload(_) => "payload_error",
            ApiError::MethodNotAllowed(_) => "method_not_allowed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidParameter(_) | ApiError::Payload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ApiError::MethodNotAllowed(_) = self {
            builder.insert_header((header::ALLOW, ALLOWED_METHODS));
        }
        builder.json(ErrorResponse {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pollutant;

    #[test]
    fn client_faults_map_to_bad_request() {
        let missing = ApiError::from(PredictError::MissingParameter(Pollutant::Co));
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.kind(), "missing_parameter");
        assert_eq!(
            ApiError::MalformedBody("EOF".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn method_not_allowed_advertises_allowed_methods() {
        let response = ApiError::MethodNotAllowed(Method::PUT).error_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), ALLOWED_METHODS);
    }

    #[test]
    fn oversized_body_maps_to_413() {
        let err = ApiError::PayloadTooLarge { limit: 16 };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "request body exceeds 16 bytes");
    }
}
