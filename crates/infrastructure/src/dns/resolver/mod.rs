pub mod builder;
pub mod config;
pub mod zone_lookup;

pub use builder::ZoneLookupBuilder;
pub use config::LookupConfig;
pub use zone_lookup::HickoryZoneLookup;
