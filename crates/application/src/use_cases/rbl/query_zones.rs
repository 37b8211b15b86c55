use crate::ports::ZoneLookup;
use crate::services::classify;
use futures::future::join_all;
use rbl_check_domain::{reverse_address, DomainError, RblZone, ReversedAddress, ZoneResult};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct QueryZonesUseCase {
    lookup: Arc<dyn ZoneLookup>,
    zones: Arc<[RblZone]>,
}

impl QueryZonesUseCase {
    pub fn new(lookup: Arc<dyn ZoneLookup>, zones: impl Into<Arc<[RblZone]>>) -> Self {
        Self {
            lookup,
            zones: zones.into(),
        }
    }

    pub fn zones(&self) -> &[RblZone] {
        &self.zones
    }

    /// Reverse `candidate` and query every configured zone.
    ///
    /// The only error is `InvalidAddress`, returned before any lookup is made.
    #[instrument(skip(self), name = "query_zones")]
    pub async fn execute(&self, candidate: &str) -> Result<Vec<ZoneResult>, DomainError> {
        let reversed = reverse_address(candidate)?;
        let results = self.query_zones(&reversed).await;

        info!(
            address = %reversed.address(),
            zones = results.len(),
            matched = results.iter().filter(|r| r.matched).count(),
            "RBL query completed"
        );

        Ok(results)
    }

    /// One lookup per zone, run concurrently. Results come back in zone order.
    pub async fn query_zones(&self, reversed: &ReversedAddress) -> Vec<ZoneResult> {
        let lookups = self.zones.iter().map(|zone| async move {
            let query_name = reversed.query_name(zone);
            debug!(zone = %zone, query_name = %query_name, "Querying zone");

            let result = self.lookup.lookup(&query_name).await;
            classify(zone.clone(), result)
        });

        join_all(lookups).await
    }
}
