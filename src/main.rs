//! personal-api server binary.
//!
//! Startup order: config, tracing, authorization, provider `open`. The
//! provider's `close` is registered as a finalizer as soon as `open`
//! succeeds; finalizers run once the server has drained, whatever the
//! reason it stopped.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use personal_api::adapters::auth::{
    GrantsFile, GrantsFileError, InMemoryAuthorizationService, TimeoutAuthorizationService,
};
use personal_api::adapters::git::InMemoryCommitSource;
use personal_api::adapters::http::{build_router, AppState, RouterOptions, ServiceInfo};
use personal_api::adapters::mood::{InMemoryMoodProvider, PostgresMoodProvider};
use personal_api::config::{AppConfig, AuthConfig, ConfigError, ServerConfig, ValidationError};
use personal_api::lifecycle::{FailureCallback, FinalizerError, FinalizerRegistry};
use personal_api::ports::{AuthorizationService, ProviderError, ServiceProvider};

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Grants(#[from] GrantsFileError),

    #[error("failed to open mood provider: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).compact().init();
    }
}

fn build_auth(config: &AuthConfig) -> Result<Arc<dyn AuthorizationService>, StartupError> {
    let service = match &config.grants_path {
        Some(path) => {
            let grants = GrantsFile::load(path)?;
            tracing::info!(path = %path.display(), grants = grants.len(), "loaded access grants");
            grants.into_service()
        }
        None => {
            tracing::warn!("no grants file configured, every access code will be rejected");
            InMemoryAuthorizationService::new()
        }
    };

    Ok(Arc::new(TimeoutAuthorizationService::new(
        service,
        config.lookup_timeout(),
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Opens `provider`, serves until a shutdown signal, then drains.
async fn serve<P>(
    provider: Arc<P>,
    auth: Arc<dyn AuthorizationService>,
    config: &AppConfig,
    finalizers: &FinalizerRegistry,
) -> Result<(), StartupError>
where
    P: ServiceProvider + 'static,
{
    provider.open().await?;
    let closer = Arc::clone(&provider);
    finalizers.register("mood provider", move || {
        let provider = Arc::clone(&closer);
        async move { provider.close().await }
    });

    let state = AppState::new(
        provider,
        auth,
        Arc::new(InMemoryCommitSource::new()),
        ServiceInfo::current(config.server.environment.as_str()),
    );
    let app = build_router(state, RouterOptions::from_config(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(%addr, "listening");

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                stop_rx.await.ok();
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            return match joined {
                Ok(result) => result.map_err(StartupError::Serve),
                Err(e) => Err(StartupError::Serve(std::io::Error::other(e))),
            };
        }
        _ = shutdown_signal() => {}
    }

    stop_tx.send(()).ok();
    let drain = config.server.shutdown_timeout();
    match tokio::time::timeout(drain, server).await {
        Ok(Ok(result)) => result.map_err(StartupError::Serve),
        Ok(Err(e)) => Err(StartupError::Serve(std::io::Error::other(e))),
        Err(_) => {
            tracing::warn!(timeout_secs = drain.as_secs(), "in-flight requests did not drain in time");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("personal-api: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.server);
    tracing::info!(
        environment = config.server.environment.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "starting personal-api"
    );

    let finalizers = FinalizerRegistry::new();
    let outcome = match build_auth(&config.auth) {
        Ok(auth) => match &config.database {
            Some(database) => {
                let provider = Arc::new(PostgresMoodProvider::new(database.clone()));
                serve(provider, auth, &config, &finalizers).await
            }
            None => {
                tracing::info!("no database configured, moods are kept in memory");
                serve(Arc::new(InMemoryMoodProvider::new()), auth, &config, &finalizers).await
            }
        },
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        tracing::error!(error = %e, "server stopped with an error");
    }

    let log_failure = |err: &FinalizerError| {
        tracing::error!(error = %err, "teardown step failed");
    };
    let callbacks: [FailureCallback<'_>; 1] = [&log_failure];
    let report = finalizers.run_all(&callbacks).await;
    tracing::info!(ran = report.ran, failed = report.failed, "teardown complete");

    if outcome.is_ok() && report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
