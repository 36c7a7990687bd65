use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use super::ApiError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Delete every account and zero the hit counter. Only available on the dev platform.
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.dev_mode {
        tracing::warn!("Reset requested outside dev platform");
        return Err(ApiError::Forbidden(
            "Reset is only allowed in dev environment".to_string(),
        ));
    }

    let users_deleted = state.user_service.reset().await?;
    state.hits.reset();

    tracing::info!(users_deleted, "Application state reset");

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], "OK"))
}
