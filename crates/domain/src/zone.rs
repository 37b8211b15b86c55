use crate::errors::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_ZONES: &[&str] = &[
    "zen.spamhaus.org",
    "bl.score.senderscore.com",
    "b.barracudacentral.org",
    "bl.spamcop.net",
];

const MAX_NAME_LEN: usize = 253;
/// Longest reversed address plus its separating dot: `255.255.255.255.`
const REVERSED_PREFIX_LEN: usize = 16;
const MAX_ZONE_LEN: usize = MAX_NAME_LEN - REVERSED_PREFIX_LEN;
const MAX_LABEL_LEN: usize = 63;

/// A validated RBL zone suffix, stored without the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RblZone(Arc<str>);

impl RblZone {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if name.is_empty() || name.len() > MAX_ZONE_LEN {
            return Err(DomainError::InvalidZone(raw.to_string()));
        }

        if !name.split('.').all(is_valid_label) {
            return Err(DomainError::InvalidZone(raw.to_string()));
        }

        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl fmt::Display for RblZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RblZone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RblZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RblZone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a comma-separated zone list such as `zen.spamhaus.org,bl.spamcop.net`.
/// Blank entries are skipped.
pub fn parse_zone_list(raw: &str) -> Result<Vec<RblZone>, DomainError> {
    let zones = raw
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(RblZone::parse)
        .collect::<Result<Vec<_>, _>>()?;

    if zones.is_empty() {
        return Err(DomainError::EmptyZoneList);
    }

    Ok(zones)
}

pub fn default_zones() -> Vec<RblZone> {
    DEFAULT_ZONES
        .iter()
        .map(|zone| RblZone(Arc::from(*zone)))
        .collect()
}
