use std::{path::Path, process, sync::Arc};

use postdesk::{
    application::{
        admin::posts::AdminPostService,
        error::{AppError, ErrorReport},
        repos::{HealthRepo, PostsRepo, PostsWriteRepo},
    },
    config,
    infra::{
        db::PostgresRepositories,
        error::InfraError,
        http::{self, AdminSettings, AdminState},
        telemetry,
    },
};
use tokio::io::AsyncWriteExt;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let chain = ErrorReport::from_error("postdesk", error).messages;
    let log = || error!(error = %error, chain = ?chain, "application error");

    if dispatcher::has_been_set() {
        log();
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, log);
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Export(args) => run_export(settings, args).await,
    }
}

async fn init_repositories(
    settings: &config::Settings,
) -> Result<Arc<PostgresRepositories>, AppError> {
    let database_url = settings
        .database
        .url
        .as_ref()
        .ok_or(InfraError::MissingDatabaseUrl)?;

    let pool = PostgresRepositories::connect(database_url, settings.database.max_connections.get())
        .await
        .map_err(InfraError::Connect)?;

    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(InfraError::from)?;

    Ok(Arc::new(PostgresRepositories::new(pool)))
}

fn build_post_service(
    repositories: &Arc<PostgresRepositories>,
    settings: &config::Settings,
) -> AdminPostService {
    let reader: Arc<dyn PostsRepo> = repositories.clone();
    let writer: Arc<dyn PostsWriteRepo> = repositories.clone();

    AdminPostService::new(reader, writer).with_submission_delay(settings.admin.submission_delay)
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let health: Arc<dyn HealthRepo> = repositories.clone();

    if !settings.admin.submission_delay.is_zero() {
        warn!(
            target = "postdesk::serve",
            delay_ms = settings.admin.submission_delay.as_millis() as u64,
            "form submissions are artificially delayed"
        );
    }

    let state = AdminState {
        posts: Arc::new(build_post_service(&repositories, &settings)),
        health,
        settings: AdminSettings {
            csv_quoting: settings.export.csv_quoting,
        },
    };
    let router = http::build_admin_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "postdesk::serve",
        addr = %settings.server.addr,
        "admin panel listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!(target = "postdesk::serve", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}

async fn run_export(settings: config::Settings, args: config::ExportArgs) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let service = build_post_service(&repositories, &settings);

    info!(
        target = "postdesk::export",
        slug = %args.slug,
        quoting = %settings.export.csv_quoting,
        "Starting export"
    );

    let csv = service
        .export_csv(&args.slug, settings.export.csv_quoting)
        .await?;

    match args.output.as_deref() {
        Some(path) => write_file(path, &csv).await?,
        None => write_stdout(&csv).await?,
    }

    info!(target = "postdesk::export", "Export completed");
    Ok(())
}

async fn write_file(path: &Path, csv: &str) -> Result<(), AppError> {
    tokio::fs::write(path, csv)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))
}

async fn write_stdout(csv: &str) -> Result<(), AppError> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(csv.as_bytes())
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    stdout
        .flush()
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))
}
