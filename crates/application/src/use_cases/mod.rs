pub mod rbl;

pub use rbl::QueryZonesUseCase;
