mod zone_lookup;

pub use zone_lookup::ZoneLookup;
