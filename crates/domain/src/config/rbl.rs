use serde::{Deserialize, Serialize};

use crate::zone::{default_zones, RblZone};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RblConfig {
    /// Zones are queried, and reported, in this order.
    #[serde(default = "default_zones")]
    pub zones: Vec<RblZone>,
}

impl Default for RblConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}
