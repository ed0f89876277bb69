//! Bearer token authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::error::AppError;
use crate::AppState;

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Validates the bearer token and injects the admin identity into request
/// extensions. Routes that require authentication should use this middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Extract and validate the token
    let token = extract_bearer_token(&request).ok_or(AppError::Unauthorized)?;
    let user = state.auth_service.verify_token(token)?;

    // Inject the admin identity into request extensions
    request.extensions_mut().insert(user);

    // Continue to the handler
    Ok(next.run(request).await)
}
