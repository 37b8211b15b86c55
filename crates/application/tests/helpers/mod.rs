mod mock_zone_lookup;

pub use mock_zone_lookup::MockZoneLookup;
