use actix_web::HttpResponse;

use crate::domain::FieldErrors;

/// Uniform JSON envelope for the form endpoints:
/// `{"status": ..., "message": ..., "errors": {...}?}`.
#[derive(serde::Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(Self {
            status: "success",
            message: message.into(),
            errors: None,
        })
    }

    pub fn info(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(Self {
            status: "info",
            message: message.into(),
            errors: None,
        })
    }

    pub fn validation_failure(message: impl Into<String>, errors: FieldErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(Self {
            status: "error",
            message: message.into(),
            errors: Some(errors),
        })
    }

    pub fn not_found(message: impl Into<String>) -> HttpResponse {
        HttpResponse::NotFound().json(Self {
            status: "error",
            message: message.into(),
            errors: None,
        })
    }

    pub fn internal_error(message: impl Into<String>) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self {
            status: "error",
            message: message.into(),
            errors: None,
        })
    }
}

pub fn opaque_error_500<T>(error: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorInternalServerError(error)
}
