use rbl_check_domain::ZoneResult;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ZoneResultResponse {
    #[serde(rename = "RblServer")]
    pub rbl_server: String,
    #[serde(rename = "IsMatch")]
    pub is_match: bool,
    #[serde(rename = "IPs")]
    pub ips: Vec<String>,
}

impl From<ZoneResult> for ZoneResultResponse {
    fn from(result: ZoneResult) -> Self {
        Self {
            rbl_server: result.zone.to_string(),
            is_match: result.matched,
            ips: result.addresses.iter().map(ToString::to_string).collect(),
        }
    }
}
