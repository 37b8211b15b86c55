use crate::errors::DomainError;
use crate::zone::RblZone;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// An IPv4 address in reverse-label order, ready to be prefixed to an RBL zone.
///
/// `1.2.3.4` is rendered as `4.3.2.1`, the same label ordering used under
/// `in-addr.arpa`, but without any zone suffix attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedAddress {
    address: Ipv4Addr,
}

impl ReversedAddress {
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn octets(&self) -> [u8; 4] {
        let [a, b, c, d] = self.address.octets();
        [d, c, b, a]
    }

    /// Absolute query name for `zone`: `<d.c.b.a>.<zone>.`
    pub fn query_name(&self, zone: &RblZone) -> String {
        format!("{}.{}.", self, zone)
    }
}

impl From<Ipv4Addr> for ReversedAddress {
    fn from(address: Ipv4Addr) -> Self {
        Self { address }
    }
}

impl fmt::Display for ReversedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, c, b, a] = self.octets();
        write!(f, "{}.{}.{}.{}", d, c, b, a)
    }
}

/// Parse `candidate` and reverse it. Only IPv4 is accepted; IPv6 literals,
/// including IPv4-mapped ones, are rejected along with anything unparseable.
pub fn reverse_address(candidate: &str) -> Result<ReversedAddress, DomainError> {
    match candidate.parse::<IpAddr>() {
        Ok(IpAddr::V4(address)) => Ok(ReversedAddress::from(address)),
        Ok(IpAddr::V6(_)) | Err(_) => Err(DomainError::InvalidAddress),
    }
}
