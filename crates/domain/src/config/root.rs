use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rbl::RblConfig;
use super::server::ServerConfig;
use crate::errors::DomainError;
use crate::zone::{parse_zone_list, RblZone};

const LOCAL_CONFIG_PATH: &str = "rbl-check.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rbl-check/config.toml";

/// Main configuration structure for RBL Check
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP listener (bind address, port)
    pub server: ServerConfig,

    /// Zones queried for every request
    pub rbl: RblConfig,

    /// Resolver used for zone lookups
    pub dns: DnsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rbl-check.toml in current directory
    /// 3. /etc/rbl-check/config.toml
    /// 4. Default configuration
    ///
    /// Command-line and environment overrides are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration. Blank values are ignored.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(port) = overrides.api_port {
            self.server.api_port = port;
        }
        if let Some(bind) = non_blank(overrides.bind_address) {
            self.server.bind_address = bind;
        }
        if let Some(zones) = non_blank(overrides.zones) {
            self.rbl.zones =
                parse_zone_list(&zones).map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        if let Some(level) = non_blank(overrides.log_level) {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_port == 0 {
            return Err(ConfigError::Validation("API port cannot be 0".to_string()));
        }

        if self.rbl.zones.is_empty() {
            return Err(ConfigError::Validation(
                DomainError::EmptyZoneList.to_string(),
            ));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }

        if self.dns.attempts == 0 {
            return Err(ConfigError::Validation(
                "DNS attempts must be at least 1".to_string(),
            ));
        }

        for server in &self.dns.nameservers {
            if server.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Nameserver '{}' is not a valid ip:port address",
                    server
                )));
            }
        }

        Ok(())
    }

    pub fn zone_list(&self) -> Vec<RblZone> {
        self.rbl.zones.clone()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Command-line and environment overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zones: Option<String>,
    pub log_level: Option<String>,
}
