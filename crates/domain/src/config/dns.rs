use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// `ip:port` nameservers. Empty means use the system resolver configuration.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Per-attempt timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: vec![],
            query_timeout: default_query_timeout(),
            attempts: default_attempts(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}
