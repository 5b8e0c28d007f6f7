use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::{routing::get, routing::post, Json, Router};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, TokenUser,
};
use crate::auth::jwt::{AuthUser, JwtKeys};
use crate::auth::password;
use crate::error::ApiError;
use crate::logs::repo::{self as log_repo, LogAction};
use crate::state::AppState;
use crate::users::repo::User;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let phone = payload.phone.trim().to_string();

    if name.is_empty() || email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation("name, email and password are required"));
    }
    if !is_valid_email(&email) {
        warn!(%email, "invalid email");
        return Err(ApiError::validation("Invalid email"));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let id = User::create(&state.db, &name, &email, &phone, &password_hash).await?;

    log_repo::record(&state.db, id, LogAction::Register).await;
    info!(user_id = id, %email, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "created",
            id,
            name,
            email,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = payload.email.trim().to_string();
    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation("email and password required"));
    }

    // Unknown email and bad password answer identically.
    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.name)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        token,
        user: TokenUser {
            id: user.id,
            name: user.name,
        },
    }))
}

#[instrument]
pub async fn profile(user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user: TokenUser {
            id: user.id,
            name: user.name,
        },
    })
}
