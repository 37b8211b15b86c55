#![allow(dead_code)]
use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const RCODE_NOERROR: u8 = 0;
const RCODE_SERVFAIL: u8 = 2;
const RCODE_NXDOMAIN: u8 = 3;

/// In-process authoritative stand-in for an RBL zone.
///
/// Names registered with `listed` answer `A` queries with their addresses,
/// names in `servfail` answer SERVFAIL, names in `silent` are never answered,
/// and everything else is NXDOMAIN.
#[derive(Default)]
pub struct MockZone {
    listed: HashMap<String, Vec<Ipv4Addr>>,
    servfail: HashSet<String>,
    silent: HashSet<String>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listed(mut self, name: &str, addresses: &[Ipv4Addr]) -> Self {
        self.listed.insert(normalize(name), addresses.to_vec());
        self
    }

    pub fn servfail(mut self, name: &str) -> Self {
        self.servfail.insert(normalize(name));
        self
    }

    pub fn silent(mut self, name: &str) -> Self {
        self.silent.insert(normalize(name));
        self
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let zone = Arc::new(zone);
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 1232];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_response(&zone, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of UDP queries received so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

struct Question {
    name: String,
    qtype: u16,
    end: usize,
}

fn parse_question(query: &[u8]) -> Option<Question> {
    let mut labels = Vec::new();
    let mut pos = 12;

    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        if len & 0xc0 != 0 {
            return None;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);

    Some(Question {
        name: labels.join("."),
        qtype,
        end: pos + 4,
    })
}

fn build_response(zone: &MockZone, query: &[u8]) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let question = parse_question(query)?;
    if question.end > query.len() || zone.silent.contains(&question.name) {
        return None;
    }

    let (rcode, answers): (u8, &[Ipv4Addr]) = if zone.servfail.contains(&question.name) {
        (RCODE_SERVFAIL, &[])
    } else if let Some(addresses) = zone.listed.get(&question.name) {
        if question.qtype == TYPE_A {
            (RCODE_NOERROR, addresses.as_slice())
        } else {
            (RCODE_NOERROR, &[])
        }
    } else {
        (RCODE_NXDOMAIN, &[])
    };

    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);
    // QR + AA, echo RD
    response.push(0x84 | (query[2] & 0x01));
    // RA + rcode
    response.push(0x80 | rcode);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..question.end]);

    for address in answers {
        response.extend_from_slice(&[
            0xc0, 0x0c,
            0x00, 0x01,
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x3c,
            0x00, 0x04,
        ]);
        response.extend_from_slice(&address.octets());
    }

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_for(name: &str, qtype: u16) -> Vec<u8> {
        let mut query = vec![0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        for label in name.split('.') {
            query.push(label.len() as u8);
            query.extend_from_slice(label.as_bytes());
        }
        query.push(0);
        query.extend_from_slice(&qtype.to_be_bytes());
        query.extend_from_slice(&[0x00, 0x01]);
        query
    }

    #[test]
    fn test_mock_response_listed_name() {
        let zone = MockZone::new().listed("2.0.0.127.rbl.test", &[Ipv4Addr::new(127, 0, 0, 2)]);

        let response = build_response(&zone, &query_for("2.0.0.127.rbl.test", TYPE_A)).unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[3] & 0x0f, RCODE_NOERROR);
        assert_eq!(response[7], 1);
        assert_eq!(response[response.len() - 4..], [127, 0, 0, 2]);
    }

    #[test]
    fn test_mock_response_unknown_name_is_nxdomain() {
        let zone = MockZone::new();

        let response = build_response(&zone, &query_for("4.3.2.1.rbl.test", TYPE_A)).unwrap();

        assert_eq!(response[3] & 0x0f, RCODE_NXDOMAIN);
        assert_eq!(response[7], 0);
    }
}
