//! Auth handlers
//!
//! Admin login and token verification.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UserProfile;
use crate::error::AppError;
use crate::AppState;

/// Request body for admin login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Response for token verification
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserProfile,
}

/// POST /api/admin/login
///
/// Verify credentials and issue a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user) = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse { token, user }))
}

/// GET /api/admin/verify
///
/// Return the identity the bearer token carries. The auth middleware has
/// already validated the token by the time this runs.
pub async fn verify(Extension(user): Extension<UserProfile>) -> Json<VerifyResponse> {
    Json(VerifyResponse { user })
}
