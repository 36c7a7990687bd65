use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_chirp::create_chirp;
use super::handlers::create_user::create_user;
use super::handlers::get_chirp::get_chirp;
use super::handlers::healthz::healthz;
use super::handlers::list_chirps::list_chirps;
use super::handlers::login::login;
use super::handlers::metrics::metrics;
use super::handlers::reset::reset;
use super::handlers::validate_chirp::validate_chirp;
use super::metrics::HitCounter;
use super::middleware::authenticate as auth_middleware;
use super::middleware::count_hits;
use crate::domain::chirp::ports::ChirpServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub chirp_service: Arc<dyn ChirpServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub hits: Arc<HitCounter>,
    pub dev_mode: bool,
}

/// Deployment settings the router needs beyond its services.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory served under `/app`
    pub static_dir: PathBuf,
    /// Enables `POST /admin/reset`
    pub dev_mode: bool,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    chirp_service: Arc<dyn ChirpServicePort>,
    authenticator: Arc<Authenticator>,
    options: RouterOptions,
) -> Router {
    let state = AppState {
        user_service,
        chirp_service,
        authenticator,
        hits: Arc::new(HitCounter::new()),
        dev_mode: options.dev_mode,
    };

    let static_routes = Router::new()
        .nest_service("/app", ServeDir::new(&options.static_dir))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.hits),
            count_hits,
        ));

    let admin_routes = Router::new()
        .route("/admin/metrics", get(metrics))
        .route("/admin/reset", post(reset));

    let public_routes = Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/validate_chirp", post(validate_chirp))
        .route("/api/users", post(create_user))
        .route("/api/login", post(login))
        .route("/api/chirps", get(list_chirps))
        .route("/api/chirps/:chirp_id", get(get_chirp));

    let protected_routes = Router::new()
        .route("/api/chirps", post(create_chirp))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Request headers stay out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(static_routes)
        .merge(admin_routes)
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
