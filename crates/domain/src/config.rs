pub mod dns;
pub mod errors;
pub mod logging;
pub mod rbl;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use rbl::RblConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
