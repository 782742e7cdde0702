//! BMI calculation endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use bmi::{BmiRequest, BmiResponse};

use crate::error::ApiError;

/// POST /calculate-bmi — validate measurements and compute BMI metrics.
///
/// A body without `Content-Type` is parsed as JSON; an explicit non-JSON
/// media type is rejected with 415.
#[tracing::instrument(skip(headers, body))]
pub async fn calculate(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<BmiResponse>, ApiError> {
    if !accepts_json(&headers) {
        return Err(ApiError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        });
    }

    let Json(request) = Json::<BmiRequest>::from_bytes(&body?)?;
    let response = bmi::compute(&request)?;
    Ok(Json(response))
}

/// True when `Content-Type` is absent or names a JSON media type.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
