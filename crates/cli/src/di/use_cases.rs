use rbl_check_application::use_cases::QueryZonesUseCase;
use rbl_check_domain::Config;
use rbl_check_infrastructure::dns::{LookupConfig, ZoneLookupBuilder};
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub query_zones: Arc<QueryZonesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let zones = config.zone_list();
        let lookup_config = LookupConfig::from(&config.dns);

        info!(
            zones = %zones.iter().map(|z| z.as_str()).collect::<Vec<_>>().join(","),
            nameservers = lookup_config.nameservers.len(),
            timeout_secs = lookup_config.timeout.as_secs(),
            "Configured RBL zones"
        );

        let lookup = ZoneLookupBuilder::new().with_config(lookup_config).build();

        Self {
            query_zones: Arc::new(QueryZonesUseCase::new(Arc::new(lookup), zones)),
        }
    }
}
