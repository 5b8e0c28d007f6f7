use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::users::repo::UserProjection;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Raw query strings so a non-numeric `page=abc` becomes our 400 instead of
/// an extractor rejection with a different body.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    /// Parsed and clamped pagination: page >= 1, 1 <= limit <= 100.
    pub fn pagination(&self) -> Result<(i64, i64), ApiError> {
        let page = match self.page.as_deref() {
            None => 1,
            Some(v) => v
                .parse::<i64>()
                .map_err(|_| ApiError::validation("invalid pagination params"))?,
        };
        let limit = match self.limit.as_deref() {
            None => 10,
            Some(v) => v
                .parse::<i64>()
                .map_err(|_| ApiError::validation("invalid pagination params"))?,
        };
        Ok((page.max(1), limit.clamp(1, 100)))
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub users: Vec<UserProjection>,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub status: &'static str,
    pub id: i64,
}
