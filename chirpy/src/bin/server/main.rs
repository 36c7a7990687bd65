use std::path::PathBuf;
use std::sync::Arc;

use auth::Authenticator;
use chirpy::chirp::service::ChirpService;
use chirpy::config::Config;
use chirpy::inbound::http::router::create_router;
use chirpy::inbound::http::router::RouterOptions;
use chirpy::repositories::PostgresChirpRepository;
use chirpy::repositories::PostgresUserRepository;
use chirpy::user::service::UserService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "chirpy",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        static_dir = %config.server.static_dir,
        jwt_issuer = %config.jwt.issuer,
        jwt_default_expiry_seconds = config.jwt.default_expiry_seconds,
        password_cost = config.password.cost,
        platform = %config.platform,
        "Configuration loaded"
    );
    anyhow::ensure!(
        !config.jwt.secret.is_empty(),
        "jwt.secret is empty; set JWT__SECRET"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        &config.jwt.issuer,
        config.password.cost,
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let chirp_repository = Arc::new(PostgresChirpRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.default_expiry_seconds,
    ));
    let chirp_service = Arc::new(ChirpService::new(chirp_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        chirp_service,
        authenticator,
        RouterOptions {
            static_dir: PathBuf::from(&config.server.static_dir),
            dev_mode: config.is_dev(),
        },
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
