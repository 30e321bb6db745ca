use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{self, DatabaseConfig};

use api::{
    config::ServerConfig,
    jwt::{JwtConfig, JwtService},
    repositories::{PostRepository, UserRepository},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity, fail fast if unreachable
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    database::run_migrations(&pool).await?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(jwt_config);

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let post_repository = PostRepository::new(pool);

    let app_state = AppState {
        jwt_service,
        user_repository,
        post_repository,
    };

    info!("API service initialized successfully");

    // Start the web server
    let server_config = ServerConfig::from_env();
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr()).await?;
    info!("API service listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
