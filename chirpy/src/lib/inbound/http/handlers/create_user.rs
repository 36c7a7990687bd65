use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = body.try_into_domain()?;

    let user = state.user_service.create_user(command).await?;
    tracing::info!(user_id = %user.id, "User created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&user).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequestBody {
    email: String,
    password: String,
}

impl CreateUserRequestBody {
    fn try_into_domain(self) -> Result<CreateUserCommand, ApiError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(CreateUserCommand::new(email, self.password))
    }
}
