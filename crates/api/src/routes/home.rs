//! Welcome endpoint.

use axum::Json;

pub const WELCOME: &str = "Welcome to the enhanced BMI Calculator";

/// GET / — returns the welcome message as a JSON string.
pub async fn welcome() -> Json<&'static str> {
    Json(WELCOME)
}
