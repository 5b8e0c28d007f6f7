use std::time::Duration;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Token payload: enough identity to serve `/profile` without a DB round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub name: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let jwt = &state.config.jwt;
        Self {
            encoding: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt.secret.as_bytes()),
            ttl: Duration::from_secs(jwt.ttl_seconds.max(0) as u64),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64, name: &str) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            user_id,
            name: name.to_string(),
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    /// Distinguishes an expired token from every other decode failure so the
    /// caller can answer `Token expired` vs `Token is invalid`.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                debug!("jwt expired");
                Err(ApiError::TokenExpired)
            }
            Err(e) => {
                warn!(error = %e, "jwt decode error");
                Err(ApiError::TokenInvalid)
            }
        }
    }
}

/// Verified identity extracted from the `Authorization: Bearer` header.
/// Protected handlers take this as an argument; there is no ambient
/// request context to consult.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::TokenMissing)?;

        let claims = keys.verify(token)?;
        Ok(AuthUser {
            id: claims.user_id,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign(42, "Alice").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.name, "Alice");
        let now = OffsetDateTime::now_utc().unix_timestamp() as usize;
        assert!(claims.exp > now);
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        let stale = Claims {
            user_id: 1,
            name: "A".into(),
            exp: (OffsetDateTime::now_utc() - TimeDuration::seconds(120)).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &stale, &keys.encoding).expect("encode");
        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::TokenExpired));
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            ttl: Duration::from_secs(300),
        };
        let token = other.sign(7, "Mallory").expect("sign");
        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::TokenInvalid));
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        let err = keys.verify("not-a-jwt").unwrap_err();
        assert!(matches!(err, ApiError::TokenInvalid));
    }

    #[tokio::test]
    async fn extractor_accepts_bearer_token() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(9, "Bob").expect("sign");
        let (mut parts, _) = Request::builder()
            .header(axum::http::header::AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts();
        let user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(user.id, 9);
        assert_eq!(user.name, "Bob");
    }

    #[tokio::test]
    async fn extractor_rejects_missing_header() {
        let state = AppState::fake();
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::TokenMissing));
    }

    #[tokio::test]
    async fn extractor_rejects_non_bearer_scheme() {
        let state = AppState::fake();
        let (mut parts, _) = Request::builder()
            .header(axum::http::header::AUTHORIZATION, "Basic dXNlcjpwdw==")
            .body(())
            .unwrap()
            .into_parts();
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::TokenMissing));
    }
}
