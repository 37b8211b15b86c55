use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IPv4 address")]
    InvalidAddress,

    #[error("Invalid zone name: {0}")]
    InvalidZone(String),

    #[error("No RBL zones configured")]
    EmptyZoneList,

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

impl DomainError {
    /// True for failures where the zone answered that the name does not exist.
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, Self::NxDomain)
    }
}
