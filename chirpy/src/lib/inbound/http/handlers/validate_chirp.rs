use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::chirp::models::ChirpBody;

pub async fn validate_chirp(
    Json(body): Json<ValidateChirpRequestBody>,
) -> Result<ApiSuccess<ValidateChirpResponseData>, ApiError> {
    ChirpBody::cleaned(&body.body)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
        .map(|cleaned_body| {
            ApiSuccess::new(StatusCode::OK, ValidateChirpResponseData { cleaned_body })
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateChirpRequestBody {
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateChirpResponseData {
    pub cleaned_body: String,
}
