use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{error::AppError, state::AppState};

/// Proof that the request carried the configured static bearer token.
///
/// This is a placeholder gate, not an identity: there is one shared token
/// and it is compared verbatim.
#[derive(Debug, Clone, Copy)]
pub struct StaffToken;

pub fn check_bearer(header_value: Option<&str>, expected: &str) -> Result<StaffToken, AppError> {
    let token = header_value
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Unauthorized: Missing Bearer Token".into()))?;

    if token != expected {
        return Err(AppError::Forbidden("Forbidden: Invalid Token".into()));
    }
    Ok(StaffToken)
}

impl FromRequestParts<AppState> for StaffToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        check_bearer(header_value, &state.config.api_token)
    }
}
