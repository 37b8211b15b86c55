use super::config::LookupConfig;
use super::zone_lookup::HickoryZoneLookup;
use hickory_resolver::config::{LookupIpStrategy, NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::TokioResolver;
use tracing::{info, warn};

pub struct ZoneLookupBuilder {
    config: LookupConfig,
}

impl ZoneLookupBuilder {
    pub fn new() -> Self {
        Self {
            config: LookupConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> HickoryZoneLookup {
        info!(
            nameservers = ?self.config.nameservers,
            timeout_ms = self.config.timeout.as_millis() as u64,
            attempts = self.config.attempts,
            "Building zone lookup resolver"
        );

        let mut builder = if self.config.nameservers.is_empty() {
            TokioResolver::builder_tokio().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read system resolver configuration, using defaults");
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
            })
        } else {
            TokioResolver::builder_with_config(
                self.resolver_config(),
                TokioConnectionProvider::default(),
            )
        };

        self.apply_options(builder.options_mut());

        HickoryZoneLookup::new(builder.build())
    }

    fn resolver_config(&self) -> ResolverConfig {
        let mut config = ResolverConfig::new();
        for addr in &self.config.nameservers {
            config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
            config.add_name_server(NameServerConfig::new(*addr, Protocol::Tcp));
        }
        config
    }

    fn apply_options(&self, opts: &mut ResolverOpts) {
        opts.timeout = self.config.timeout;
        opts.attempts = self.config.attempts;
        // Zones publish A records only; one query per zone.
        opts.ip_strategy = LookupIpStrategy::Ipv4Only;
        // Every request must reach the zone; nothing is cached between requests.
        opts.cache_size = 0;
    }
}

impl Default for ZoneLookupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
