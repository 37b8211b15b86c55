use rbl_check_domain::config::DnsConfig;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Empty means the system resolver configuration is used.
    pub nameservers: Vec<SocketAddr>,
    pub timeout: Duration,
    pub attempts: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::from(&DnsConfig::default())
    }
}

impl From<&DnsConfig> for LookupConfig {
    /// Nameservers that do not parse are skipped; `Config::validate` rejects
    /// them before this point.
    fn from(config: &DnsConfig) -> Self {
        Self {
            nameservers: config
                .nameservers
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect(),
            timeout: Duration::from_secs(config.query_timeout),
            attempts: config.attempts,
        }
    }
}
