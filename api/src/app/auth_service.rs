//! Auth service
//!
//! Handles admin login, bearer token issuance/verification, and startup
//! seeding of the admin account.

use std::sync::Arc;

use bcrypt::DEFAULT_COST;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewUser, UserId, UserProfile};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// How long an issued token stays valid
const TOKEN_TTL_HOURS: i64 = 24;

/// Signed bearer token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Expiry as unix timestamp
    pub exp: usize,
}

impl Claims {
    /// The user identity carried by the token
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: UserId(self.sub),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Service for admin authentication
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    secret: String,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>, secret: String) -> Self {
        Self { users, secret }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which part was wrong.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, UserProfile), AppError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                return Err(AppError::Domain(DomainError::Unauthorized(
                    "Invalid email or password".to_string(),
                )))
            }
        };

        let profile = user.profile();
        let token = mint_token(&self.secret, &profile)?;

        Ok((token, profile))
    }

    /// Validate a bearer token and return the identity it carries
    pub fn verify_token(&self, token: &str) -> Result<UserProfile, AppError> {
        let claims = decode_token(&self.secret, token)?;
        Ok(claims.profile())
    }

    /// Create the admin account if no user with that email exists yet.
    /// Called once at startup; a second run is a no-op.
    pub async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(), AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Ok(());
        }

        let password_hash = hash_password(password)?;
        self.users
            .create(&NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
                role: "admin".to_string(),
            })
            .await?;

        tracing::info!(email = %email, "Seeded admin user");
        Ok(())
    }
}

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, DEFAULT_COST)
        .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Sign a token carrying the user's identity
pub fn mint_token(secret: &str, user: &UserProfile) -> Result<String, DomainError> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.0,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| DomainError::Internal(format!("Failed to sign token: {}", e)))
}

/// Decode and validate a token (signature and expiry)
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, DomainError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| DomainError::Unauthorized("Invalid or expired token".to_string()))
}
