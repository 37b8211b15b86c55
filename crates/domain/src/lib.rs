//! RBL Check Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod zone;
pub mod zone_result;

pub use address::{reverse_address, ReversedAddress};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use zone::{parse_zone_list, RblZone, DEFAULT_ZONES};
pub use zone_result::{LookupOutcome, ZoneResult};
