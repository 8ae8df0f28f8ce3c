mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use urlmini_core::{Shortener, ShortenerSettings};
use urlmini_gateway::{logging, App, AppState};
use urlmini_generator::RandomFragments;
use urlmini_shortener::UrlShortener;
use urlmini_storage::{InMemoryStore, MySqlStore, MySqlStoreSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    logging::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        host = %config.host,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let settings = ShortenerSettings::builder()
        .host(config.host.clone())
        .max_attempts(config.max_attempts)
        .created_by(config.created_by.clone())
        .build();

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(UrlShortener::new(
            InMemoryStore::new(),
            RandomFragments::new(),
            settings,
        )),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store_settings = MySqlStoreSettings::builder()
                .table_name(config.table_name.clone())
                .build();
            let store = MySqlStore::connect(mysql_dsn, store_settings)
                .await
                .context("failed to connect to mysql")?;
            store
                .create_table()
                .await
                .context("failed to create mapping table")?;
            info!(table = %store.table_name(), "mysql store ready");
            Arc::new(UrlShortener::new(store, RandomFragments::new(), settings))
        }
    };

    let router = App::router(AppState::new(shortener));
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
