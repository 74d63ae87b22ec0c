use contactdesk_api_rest::RestServerConfig;
use contactdesk_config::Config;
use contactdesk_core_health_impl::HealthFeatureConfig;
use contactdesk_di::provider;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,

        // API
        rest_server_config: RestServerConfig,

        // Core
        health_feature_config: HealthFeatureConfig,
    }
}

impl Provider {
    pub fn new(config: &Config, database: Database) -> Self {
        Self {
            _cache: Default::default(),
            database,

            // API
            rest_server_config: RestServerConfig {
                addr: config.http.addr(),
            },

            // Core
            health_feature_config: HealthFeatureConfig {
                cache_ttl: config.health.cache_ttl.into(),
            },
        }
    }
}
