use async_trait::async_trait;
use rbl_check_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait ZoneLookup: Send + Sync {
    /// Address lookup of an absolute query name such as `4.3.2.1.zen.spamhaus.org.`.
    async fn lookup(&self, query_name: &str) -> Result<Vec<IpAddr>, DomainError>;
}
