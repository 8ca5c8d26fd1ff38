use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use supermarket_admin as app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = app::config::load_config().context("failed to load configuration")?;
    app::config::init_tracing(cfg.log_level(), cfg.log_json);
    cfg.log_summary();

    // Init DB
    let db_pool = app::db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to the database")?;
    if cfg.auto_migrate {
        app::db::run_migrations(&db_pool).await.map_err(|e| {
            error!("Failed running migrations: {}", e);
            e
        })?;
    }

    // The pool is reference counted internally; this handle closes it for everyone
    let shutdown_pool = db_pool.clone();

    let state = app::AppState::new(db_pool, cfg.clone());
    let router = app::build_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cfg.host, cfg.port))?;
    info!(
        "🚀 supermarket-admin listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down gracefully...");
    if let Err(err) = app::db::close_pool(shutdown_pool).await {
        warn!("Error while closing the database pool: {}", err);
    }
    info!("Database pool closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
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
}
