pub mod query_zones;

pub use query_zones::QueryZonesUseCase;
