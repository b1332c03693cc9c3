use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Startup and I/O failures outside of request handling.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database url is not configured (set `database.url` or POSTDESK__DATABASE__URL)")]
    MissingDatabaseUrl,
    #[error("could not connect to the database")]
    Connect(#[source] sqlx::Error),
    #[error("database migrations failed")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("tracing subscriber could not be installed")]
    Telemetry(#[from] TryInitError),
}
