use contactdesk_config::Config;
use contactdesk_di::Provide;
use contactdesk_persistence_contracts::Database;
use tracing::info;

use crate::{
    database,
    environment::{types::RestServer, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    let mut provider = Provider::new(&config, database);
    let server: RestServer = provider.provide();
    info!("Starting http server on {}", config.http.addr());
    server.serve().await
}
