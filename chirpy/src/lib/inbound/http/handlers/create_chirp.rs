use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ChirpData;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::chirp::models::CreateChirpCommand;
use crate::domain::chirp::ports::ChirpServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_chirp(
    State(state): State<AppState>,
    Extension(author): Extension<AuthenticatedUser>,
    Json(body): Json<CreateChirpRequestBody>,
) -> Result<ApiSuccess<ChirpData>, ApiError> {
    let body = ChirpBody::new(body.body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let chirp = state
        .chirp_service
        .create_chirp(CreateChirpCommand::new(author.user_id, body))
        .await?;
    tracing::info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "Chirp created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&chirp).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChirpRequestBody {
    body: String,
}
