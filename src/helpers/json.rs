use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;
use serde_json::{json, Value};

/// Response construction for the REST surface.
///
/// Success bodies are the bare entity or array. Error bodies carry
/// `{status, code, message}` plus a per-field `errors` object on
/// validation failures, and are turned into `actix_web::Error` so
/// handlers can bail with `?`.
pub(crate) struct JsonResponse;

#[derive(Serialize)]
struct ErrorBody {
    status: String,
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

impl JsonResponse {
    pub(crate) fn ok<T: Serialize>(item: T) -> HttpResponse {
        HttpResponse::Ok().json(item)
    }

    pub(crate) fn created<T: Serialize>(item: T) -> HttpResponse {
        HttpResponse::Created().json(item)
    }

    pub(crate) fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "message": message }))
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Error {
        error_response(StatusCode::BAD_REQUEST, message.into(), None)
    }

    /// Validation failure with the full set of offending fields.
    pub(crate) fn form_error(errors: serde_valid::validation::Errors) -> Error {
        let detail = serde_json::to_value(&errors).unwrap_or(Value::Null);
        error_response(
            StatusCode::BAD_REQUEST,
            "Validation error".to_string(),
            Some(detail),
        )
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Error {
        error_response(StatusCode::NOT_FOUND, message.into(), None)
    }

    pub(crate) fn internal_server_error(message: impl Into<String>) -> Error {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, message.into(), None)
    }
}

fn error_response(code: StatusCode, message: String, errors: Option<Value>) -> Error {
    let body = ErrorBody {
        status: "Error".to_string(),
        code: code.as_u16(),
        message,
        errors,
    };
    InternalError::from_response("", HttpResponse::build(code).json(body)).into()
}
