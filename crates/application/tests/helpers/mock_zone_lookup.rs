#![allow(dead_code)]

use async_trait::async_trait;
use rbl_check_application::ports::ZoneLookup;
use rbl_check_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers from a fixed table keyed by query name. Names without an entry
/// resolve to NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockZoneLookup {
    responses: Arc<Mutex<HashMap<String, Vec<IpAddr>>>>,
    errors: Arc<Mutex<HashMap<String, DomainError>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockZoneLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, query_name: &str, addresses: &[&str]) {
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.responses
            .lock()
            .unwrap()
            .insert(query_name.to_string(), addresses);
    }

    pub fn set_error(&self, query_name: &str, error: DomainError) {
        self.errors
            .lock()
            .unwrap()
            .insert(query_name.to_string(), error);
    }

    pub fn set_delay(&self, query_name: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(query_name.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZoneLookup for MockZoneLookup {
    async fn lookup(&self, query_name: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.lock().unwrap().push(query_name.to_string());

        let delay = self.delays.lock().unwrap().get(query_name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.errors.lock().unwrap().get(query_name) {
            return Err(error.clone());
        }

        self.responses
            .lock()
            .unwrap()
            .get(query_name)
            .cloned()
            .ok_or(DomainError::NxDomain)
    }
}
