//! Courier webserver entry point
//!
//! Parses configuration, opens the selected record store, seeds the sample
//! tracking data and serves the API until Ctrl+C.

use anyhow::Context;
use shared::logging;

use courier_webserver::{
    MemoryRecordStore, RecordStore, ServerConfig, SledRecordStore, StoreBackend, WebServer,
    services::seed_tracking_data,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();
    logging::init_tracing(Some(&config.log_level));

    match config.store {
        StoreBackend::Memory => serve(MemoryRecordStore::new(), &config).await,
        StoreBackend::Sled => {
            let store = SledRecordStore::open(&config.data_dir)
                .with_context(|| format!("opening sled database at {}", config.data_dir.display()))?;
            serve(store.clone(), &config).await?;
            store.flush().await.context("flushing sled database")?;
            Ok(())
        }
    }
}

async fn serve<S: RecordStore + 'static>(store: S, config: &ServerConfig) -> anyhow::Result<()> {
    if !config.no_seed {
        seed_tracking_data(&store).await.context("seeding tracking data")?;
    }

    let webserver = WebServer::new(store).with_static_dir(&config.static_dir);
    webserver.run(config.bind_address()).await?;

    logging::log_success("Courier webserver stopped gracefully");
    Ok(())
}
