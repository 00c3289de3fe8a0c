use std::time::Duration;

use clap::Parser;
use provider::{MovieProvider, NormalizedMovie, OmdbConfig, OmdbProvider, omdb::DEFAULT_BASE_URL};
use sqlx::PgPool;
use storage::{Database, dto::movie::MovieResponse, repository::movie::MovieRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

#[derive(Parser)]
#[command(name = "fetch-movie")]
#[command(about = "Look a movie up on OMDb and optionally add it to the catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Title to look up
    title: String,

    #[arg(long, env = "OMDB_API_KEY")]
    api_key: String,

    #[arg(long, env = "OMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "OMDB_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Store the movie and its ratings in the catalog database
    #[arg(long, requires = "database_url")]
    save: bool,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("fetch_movie={},provider={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = OmdbProvider::new(
        OmdbConfig::new(cli.api_key)
            .with_base_url(cli.base_url)
            .with_timeout(Duration::from_secs(cli.timeout_secs)),
    )?;

    let movie = provider.fetch(&cli.title).await?;
    println!("{}", serde_json::to_string_pretty(&movie)?);

    if let (true, Some(database_url)) = (cli.save, cli.database_url.as_deref()) {
        let db = Database::new(database_url).await?;
        db.run_migrations().await?;

        let stored = save(db.pool(), &movie).await?;
        tracing::info!("Saved {:?} as movie {}", stored.movie.title, stored.movie.id);
    }

    Ok(())
}

/// Stores the movie once it satisfies the catalog constraints
async fn save(
    pool: &PgPool,
    movie: &NormalizedMovie,
) -> Result<MovieResponse, Box<dyn std::error::Error>> {
    movie.validate()?;

    Ok(MovieRepository::new(pool).create(movie).await?)
}
