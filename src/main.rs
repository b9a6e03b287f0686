use std::{process, sync::Arc};

use bacheca::{
    application::{
        error::AppError,
        flash::FlashStore,
        posts::PostService,
        repos::{HealthRepo, PostsRepo, PostsWriteRepo},
    },
    config,
    infra::{
        db::PostgresRepositories,
        error::InfraError,
        http::{self, AppState, FlashSessions},
        telemetry,
    },
};
use sqlx::PgPool;
use tokio::signal;
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
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match cli_args.command_or_default() {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Migrate(_) => run_migrate(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let pool = connect_and_migrate(&settings).await?;
    let repositories = Arc::new(PostgresRepositories::new(pool));
    let state = build_app_state(repositories, &settings.session);

    serve_http(&settings.server, state).await
}

async fn run_migrate(settings: config::Settings) -> Result<(), AppError> {
    let pool = connect_and_migrate(&settings).await?;
    pool.close().await;
    info!("database migrations applied");
    Ok(())
}

async fn connect_and_migrate(settings: &config::Settings) -> Result<PgPool, AppError> {
    let database_url = settings
        .database
        .url
        .as_ref()
        .ok_or_else(|| InfraError::configuration("database url is not configured"))
        .map_err(AppError::from)?;

    let pool = PostgresRepositories::connect(database_url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::migration(err.to_string())))?;

    Ok(pool)
}

fn build_app_state(
    repositories: Arc<PostgresRepositories>,
    session: &config::SessionSettings,
) -> AppState {
    let posts_reader: Arc<dyn PostsRepo> = repositories.clone();
    let posts_writer: Arc<dyn PostsWriteRepo> = repositories.clone();
    let health: Arc<dyn HealthRepo> = repositories;

    let store = FlashStore::new(session.max_messages, session.max_sessions);

    AppState {
        posts: Arc::new(PostService::new(posts_reader, posts_writer)),
        health,
        sessions: FlashSessions::new(store, session.cookie_name.as_str()),
    }
}

async fn serve_http(server: &config::ServerSettings, state: AppState) -> Result<(), AppError> {
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(addr = %server.addr, "listening");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM. A handler that fails to install never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received SIGTERM"),
    }

    info!("shutting down gracefully");
}
