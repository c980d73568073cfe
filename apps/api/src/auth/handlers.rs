use axum::{async_trait, extract::FromRequestParts, extract::State, http::request::Parts, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::passwords::{hash_password, verify_password};
use crate::auth::tokens::{digest_token, generate_token, session_ttl};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// The authenticated caller, resolved from a `Bearer` session token.
/// Handlers take this as an extractor argument; unauthenticated requests are
/// rejected before the handler body runs.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT u.* FROM users u
            JOIN sessions s ON s.user_id = u.id
            WHERE s.token_digest = $1 AND s.expires_at > now() AND u.is_active
            "#,
        )
        .bind(digest_token(token))
        .fetch_optional(&state.db)
        .await?;

        user.map(AuthUser).ok_or(AppError::Unauthorized)
    }
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let existing: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let user: User = sqlx::query_as(
        "INSERT INTO users (full_name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&req.full_name)
    .bind(&req.email)
    .bind(hash_password(&req.password))
    .fetch_one(&state.db)
    .await?;

    info!(user_id = %user.id, "registered new user");
    issue_session(&state, &user).await
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1 AND is_active")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;

    // Same rejection for unknown email and wrong password.
    let user = user.ok_or(AppError::Unauthorized)?;
    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    issue_session(&state, &user).await
}

/// GET /api/v1/auth/me
pub async fn handle_me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

async fn issue_session(state: &AppState, user: &User) -> Result<Json<TokenResponse>, AppError> {
    let (token, digest) = generate_token();

    sqlx::query("INSERT INTO sessions (token_digest, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(&digest)
        .bind(user.id)
        .bind(Utc::now() + session_ttl())
        .execute(&state.db)
        .await?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}
