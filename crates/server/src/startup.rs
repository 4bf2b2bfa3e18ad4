use std::future::Future;

use anyhow::Context;
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use service::SeaOrmAlbumRepository;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// Open the pool, prove the database answers, optionally migrate.
pub async fn connect_store(cfg: &configs::DatabaseConfig) -> anyhow::Result<SeaOrmAlbumRepository> {
    let db = connect_with_config(&DatabaseConfig::from(cfg))
        .await
        .context("cannot open database connection")?;
    test_connection(&db).await.context("database did not answer ping")?;
    info!("connected to database");

    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await.context("database migration failed")?;
        info!("database migrations applied");
    }
    Ok(SeaOrmAlbumRepository::new(db))
}

/// Serve `state` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::build_router(state, routes::default_cors());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;
    Ok(())
}

/// Public entry: connect, bind and run the HTTP server until Ctrl+C / SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // 数据库不可用时不监听端口
    let store = connect_store(&cfg.database).await?;
    let state = ServerState::new(store);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "listening");

    serve(listener, state, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
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
    info!("shutdown signal received");
}
