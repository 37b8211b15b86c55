pub mod zone_result;

pub use zone_result::ZoneResultResponse;
