use async_trait::async_trait;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, ResolveErrorKind, TokioResolver};
use rbl_check_application::ports::ZoneLookup;
use rbl_check_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

pub struct HickoryZoneLookup {
    resolver: TokioResolver,
}

impl HickoryZoneLookup {
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }

    /// NXDOMAIN and NODATA are negative answers; a timeout keeps its own
    /// variant; SERVFAIL, REFUSED and everything else is a generic lookup failure.
    pub fn map_error(error: &ResolveError) -> DomainError {
        if let ResolveErrorKind::Proto(proto) = error.kind() {
            match proto.kind() {
                ProtoErrorKind::NoRecordsFound { response_code, .. } => {
                    if matches!(response_code, ResponseCode::NXDomain | ResponseCode::NoError) {
                        return DomainError::NxDomain;
                    }
                }
                ProtoErrorKind::Timeout => return DomainError::QueryTimeout,
                _ => {}
            }
        }

        DomainError::LookupFailed(error.to_string())
    }
}

#[async_trait]
impl ZoneLookup for HickoryZoneLookup {
    async fn lookup(&self, query_name: &str) -> Result<Vec<IpAddr>, DomainError> {
        match self.resolver.lookup_ip(query_name).await {
            Ok(lookup) => {
                let addresses: Vec<IpAddr> = lookup.iter().collect();
                debug!(
                    query_name = %query_name,
                    addresses = addresses.len(),
                    "Address lookup succeeded"
                );
                Ok(addresses)
            }
            Err(e) => {
                debug!(query_name = %query_name, error = %e, "Address lookup failed");
                Err(Self::map_error(&e))
            }
        }
    }
}
