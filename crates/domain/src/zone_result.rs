use crate::errors::DomainError;
use crate::zone::RblZone;
use std::net::IpAddr;

/// Verdict for one zone of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResult {
    pub zone: RblZone,
    pub matched: bool,
    pub addresses: Vec<IpAddr>,
}

impl ZoneResult {
    pub fn listed(zone: RblZone, addresses: Vec<IpAddr>) -> Self {
        Self {
            zone,
            matched: true,
            addresses,
        }
    }

    pub fn not_listed(zone: RblZone) -> Self {
        Self {
            zone,
            matched: false,
            addresses: Vec::new(),
        }
    }
}

/// What a single zone lookup actually told us, before it is folded into a
/// [`ZoneResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The lookup succeeded; the addresses are the zone's listing data.
    Answered(Vec<IpAddr>),
    /// The zone answered NXDOMAIN for the query name.
    NotListed,
    /// The lookup could not be completed (timeout, SERVFAIL, transport error).
    Inconclusive(String),
}

impl From<Result<Vec<IpAddr>, DomainError>> for LookupOutcome {
    fn from(result: Result<Vec<IpAddr>, DomainError>) -> Self {
        match result {
            Ok(addresses) => Self::Answered(addresses),
            Err(e) if e.is_negative_answer() => Self::NotListed,
            Err(e) => Self::Inconclusive(e.to_string()),
        }
    }
}
