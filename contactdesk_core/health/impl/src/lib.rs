use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use contactdesk_core_health_contracts::{HealthFeatureService, HealthStatus};
use contactdesk_di::Build;
use contactdesk_persistence_contracts::Database;
use contactdesk_shared_contracts::time::TimeService;
use contactdesk_utils::trace_instrument;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    /// How long a status is reused before the dependencies are checked again.
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl CachedStatus {
    fn get(&self, now: DateTime<Utc>, ttl: Duration) -> Option<HealthStatus> {
        (now < self.timestamp + ttl).then_some(self.status)
    }
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    #[trace_instrument(skip(self))]
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let ttl = self.config.cache_ttl;

        if let Some(status) = self.state.cache.read().await.as_ref().and_then(|c| c.get(now, ttl)) {
            return status;
        }

        let mut cache = self.state.cache.write().await;
        if let Some(status) = cache.as_ref().and_then(|c| c.get(now, ttl)) {
            return status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        let status = HealthStatus { database };
        *cache = Some(CachedStatus {
            status,
            timestamp: now,
        });
        status
    }
}
