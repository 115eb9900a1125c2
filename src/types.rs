use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Discovery API response. Every field defaults when absent so a single
/// malformed record never aborts a run; only unparseable top-level JSON is
/// an error.
#[derive(Debug, Default, Deserialize)]
pub struct DiscoveryResponse {
    #[serde(default)]
    pub response_map: Vec<ResponseEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseEntry {
    #[serde(default)]
    pub running: Vec<RunningNode>,
}

/// One running node as reported by the discovery API.
#[derive(Debug, Default, Deserialize)]
pub struct RunningNode {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub info_map: InfoMap,
}

#[derive(Debug, Default, Deserialize)]
pub struct InfoMap {
    #[serde(default)]
    pub ports: Vec<PortEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PortEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub port: String,
}

/// One file_sd entry consumed by the metrics scraper: a single
/// `host:port` address plus the label set for that target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub targets: Vec<String>,
    pub labels: HashMap<String, String>,
}
