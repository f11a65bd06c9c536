use std::sync::Arc;

use savedpins::api::DynAPI;
use savedpins::config::Config;
use savedpins::db::PgPool;
use savedpins::engine::Engine;
use savedpins::error::Error;
use savedpins::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections).await?;

    let engine = Arc::new(Engine::new(pool).await?);

    let result = serve(engine.clone() as DynAPI, config.bind_addr, shutdown_signal()).await;

    engine.close().await;

    result
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
