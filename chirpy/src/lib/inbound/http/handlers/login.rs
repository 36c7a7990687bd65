use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = LoginCommand {
        email: body.email,
        password: body.password,
        requested_lifetime_seconds: body.expires_in_seconds,
    };

    let session = state.user_service.login(command).await.map_err(|e| {
        match &e {
            UserError::InvalidCredentials => tracing::warn!("Login rejected: invalid credentials"),
            UserError::Authentication(cause) if cause.is_fault() && cause.is_unauthorized() => {
                tracing::error!(error = %cause, "Login failed on stored credential")
            }
            UserError::Authentication(cause) if cause.is_unauthorized() => {
                tracing::warn!(error = %cause, "Login rejected")
            }
            _ => {}
        }
        ApiError::from(e)
    })?;

    tracing::info!(user_id = %session.user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&session.user).into(),
            token: session.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
    #[serde(default)]
    expires_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    #[serde(flatten)]
    pub user: UserData,
    pub token: String,
}
