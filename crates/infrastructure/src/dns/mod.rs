pub mod resolver;

pub use resolver::{HickoryZoneLookup, LookupConfig, ZoneLookupBuilder};
