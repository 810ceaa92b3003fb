// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{"success": true, "data": ...}`. The error key is
/// never present on success, so the frontend can branch on `success` alone.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct ApiResponse<T> {
    /// Always true
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Failure envelope: `{"success": false, "error": {code, message}}`.
#[derive(Serialize, ToSchema)]
pub struct ApiFailure {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone, ToSchema)]
pub struct ApiError {
    /// One of INVALID_INPUT, SERVICE_UNAVAILABLE, DELIVERY_FAILED,
    /// INTERNAL_ERROR
    #[schema(example = "INVALID_INPUT")]
    pub code: String,

    /// Human-readable detail, safe to show the submitter
    #[schema(example = "Email must not be empty")]
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data,
        })
    }
}

impl ApiFailure {
    fn build(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiFailure {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    /// 400, user-correctable: contact fields missing or malformed
    pub fn invalid_input(message: &str) -> HttpResponse {
        Self::build(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    /// 500, operator-correctable: the mail transport has no credentials
    pub fn service_unavailable(message: &str) -> HttpResponse {
        Self::build(StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_UNAVAILABLE", message)
    }

    /// 500, surfaced only under the strict delivery policy
    pub fn delivery_failed(message: &str) -> HttpResponse {
        Self::build(StatusCode::INTERNAL_SERVER_ERROR, "DELIVERY_FAILED", message)
    }

    /// 500: content failed validation on its way out
    pub fn internal_error() -> HttpResponse {
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
