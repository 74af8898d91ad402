use std::future::Future;

use axum::Router;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already connected (and migrated) database.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), build_cors())
}

/// Connect using the configured pool settings and apply pending migrations
/// when `database.auto_migrate` is set.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_env(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    models::db::test_connection(&db).await?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    } else {
        warn!("auto_migrate disabled; assuming schema is current");
    }
    Ok(db)
}

/// Public entry: build the app and serve until the process is killed.
pub async fn run() -> anyhow::Result<()> {
    run_with_shutdown(std::future::pending::<()>()).await
}

/// Build the app and serve until `shutdown` resolves, then drain connections.
pub async fn run_with_shutdown<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cfg = configs::AppConfig::load_or_env()?;
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "customer ledger listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
