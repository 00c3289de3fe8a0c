use std::sync::Arc;

use anyhow::Context;
use provider::{OmdbConfig, OmdbProvider};
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::movies::handlers::list_movies,
        features::movies::handlers::create_movie,
        features::comments::handlers::list_comments,
        features::comments::handlers::create_comment,
        features::top_movies::handlers::get_top_movies,
    ),
    components(
        schemas(
            storage::dto::movie::CreateMovieRequest,
            storage::dto::movie::MovieResponse,
            storage::dto::movie::RatingResponse,
            storage::dto::comment::CreateCommentRequest,
            storage::dto::comment::CommentResponse,
            storage::dto::ranking::TopMovieEntry,
            storage::models::Movie,
        )
    ),
    tags(
        (name = "movies", description = "Movies fetched from OMDb"),
        (name = "comments", description = "Comments on stored movies"),
        (name = "top-movies", description = "Movies ranked by comment activity"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting movie catalog API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let provider = OmdbProvider::new(
        OmdbConfig::new(config.omdb_api_key.clone())
            .with_base_url(config.omdb_base_url.clone())
            .with_timeout(config.omdb_timeout),
    )
    .context("Failed to build OMDb client")?;
    tracing::info!(
        "Fetching movies from {} with a {:?} timeout",
        config.omdb_base_url,
        config.omdb_timeout
    );

    let state = AppState::new(db, Arc::new(provider));

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
