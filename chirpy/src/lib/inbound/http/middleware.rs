use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::metrics::HitCounter;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates bearer tokens and adds user info to request extensions
///
/// Every rejection answers with the same 401 body; the precise cause is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let user_id = state.authenticator.authorize(req.headers()).map_err(|e| {
        if e.is_unauthorized() {
            tracing::warn!(error = %e, "Bearer authentication rejected");
            ApiError::Unauthorized.into_response()
        } else {
            ApiError::InternalServerError(e.to_string()).into_response()
        }
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(user_id),
    });

    Ok(next.run(req).await)
}

/// Middleware that counts requests for the static site
pub async fn count_hits(
    State(hits): State<Arc<HitCounter>>,
    req: Request,
    next: Next,
) -> Response {
    hits.increment();
    next.run(req).await
}
