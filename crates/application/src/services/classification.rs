use rbl_check_domain::{DomainError, LookupOutcome, RblZone, ZoneResult};
use std::net::IpAddr;
use tracing::{debug, warn};

/// Turn one zone's lookup result into its verdict.
///
/// Any successful lookup counts as a match and its addresses are kept as-is,
/// even when empty. Every failure, NXDOMAIN or otherwise, is reported as not
/// matched; the two kinds of failure are only told apart in the logs.
pub fn classify(zone: RblZone, result: Result<Vec<IpAddr>, DomainError>) -> ZoneResult {
    match LookupOutcome::from(result) {
        LookupOutcome::Answered(addresses) => {
            debug!(zone = %zone, addresses = ?addresses, "Zone lookup answered");
            ZoneResult::listed(zone, addresses)
        }
        LookupOutcome::NotListed => {
            debug!(zone = %zone, "Zone returned NXDOMAIN");
            ZoneResult::not_listed(zone)
        }
        LookupOutcome::Inconclusive(reason) => {
            warn!(zone = %zone, error = %reason, "Zone lookup inconclusive, reporting as not matched");
            ZoneResult::not_listed(zone)
        }
    }
}
