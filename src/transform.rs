use crate::constants::{SECURE_PORT_NAME, TARGET_LABEL};
use crate::error::Result;
use crate::types::{DiscoveryResponse, RunningNode, TargetGroup};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, info};

/// Non-cloud labels embed the node address, e.g. `ip-10-0-1-23`; the four
/// numeric groups reconstruct the dotted quad.
static IP_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"ip-(\d+)-(\d+)-(\d+)-(\d+)").unwrap());

/// Turns raw discovery API bytes into scrape targets, preserving traversal
/// order (outer `response_map` entries, then inner `running` nodes). Nodes
/// without a secure port are dropped, not errors.
pub fn transform(raw: &[u8]) -> Result<Vec<TargetGroup>> {
    let response: DiscoveryResponse = serde_json::from_slice(raw)?;

    let mut groups = Vec::new();
    for entry in &response.response_map {
        for node in &entry.running {
            let host = resolve_host(node);
            debug!("Processing node label={:?} host={:?}", node.label, host);

            match find_secure_port(node) {
                Some(port) => {
                    let mut labels = HashMap::new();
                    labels.insert(TARGET_LABEL.to_string(), host.clone());
                    groups.push(TargetGroup {
                        targets: vec![format!("{host}:{port}")],
                        labels,
                    });
                }
                None => {
                    debug!("No secure port for node label={:?}, skipping", node.label);
                }
            }
        }
    }

    info!("Transformed discovery response into {} targets", groups.len());
    Ok(groups)
}

/// Address to scrape for a node: cloud nodes report a usable hostname;
/// everything else encodes its address in the label, falling back to the
/// raw label when the pattern does not match.
fn resolve_host(node: &RunningNode) -> String {
    if node.location == "cloud" {
        return node.hostname.clone();
    }
    match IP_LABEL.captures(&node.label) {
        Some(caps) => format!("{}.{}.{}.{}", &caps[1], &caps[2], &caps[3], &caps[4]),
        None => node.label.clone(),
    }
}

/// First port entry named `cc_secure_port`, if any.
fn find_secure_port(node: &RunningNode) -> Option<&str> {
    node.info_map
        .ports
        .iter()
        .find(|p| p.name == SECURE_PORT_NAME)
        .map(|p| p.port.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScraperError;
    use serde_json::json;

    fn response_with(running: Vec<serde_json::Value>) -> Vec<u8> {
        json!({ "response_map": [{ "running": running }] })
            .to_string()
            .into_bytes()
    }

    fn node(label: &str, hostname: &str, location: &str, ports: serde_json::Value) -> serde_json::Value {
        json!({
            "label": label,
            "hostname": hostname,
            "location": location,
            "info_map": { "ports": ports }
        })
    }

    #[test]
    fn datacenter_label_becomes_dotted_quad() {
        let raw = response_with(vec![node(
            "ip-10-0-1-23",
            "h1",
            "dc",
            json!([{ "name": "cc_secure_port", "port": "9443" }]),
        )]);

        let groups = transform(&raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].targets, vec!["10.0.1.23:9443"]);
        assert_eq!(groups[0].labels["labelname"], "10.0.1.23");
    }

    #[test]
    fn cloud_node_uses_hostname_regardless_of_label() {
        let raw = response_with(vec![node(
            "ip-10-0-1-23",
            "h1",
            "cloud",
            json!([{ "name": "cc_secure_port", "port": "9443" }]),
        )]);

        let groups = transform(&raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].targets, vec!["h1:9443"]);
        assert_eq!(groups[0].labels["labelname"], "h1");
    }

    #[test]
    fn unmatched_label_falls_back_verbatim() {
        let raw = response_with(vec![node(
            "worker-east-2",
            "h1",
            "dc",
            json!([{ "name": "cc_secure_port", "port": "8443" }]),
        )]);

        let groups = transform(&raw).unwrap();
        assert_eq!(groups[0].targets, vec!["worker-east-2:8443"]);
        assert_eq!(groups[0].labels["labelname"], "worker-east-2");
    }

    #[test]
    fn node_without_secure_port_is_dropped() {
        let raw = response_with(vec![node(
            "ip-10-0-1-23",
            "h1",
            "dc",
            json!([{ "name": "http_port", "port": "8080" }]),
        )]);

        let groups = transform(&raw).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn first_secure_port_entry_wins() {
        let raw = response_with(vec![node(
            "ip-10-0-1-23",
            "h1",
            "dc",
            json!([
                { "name": "http_port", "port": "8080" },
                { "name": "cc_secure_port", "port": "9443" },
                { "name": "cc_secure_port", "port": "10443" }
            ]),
        )]);

        let groups = transform(&raw).unwrap();
        assert_eq!(groups[0].targets, vec!["10.0.1.23:9443"]);
    }

    #[test]
    fn order_follows_input_traversal() {
        let raw = json!({
            "response_map": [
                { "running": [
                    node("ip-10-0-0-1", "a", "dc", json!([{ "name": "cc_secure_port", "port": "1" }])),
                    node("ip-10-0-0-2", "b", "dc", json!([{ "name": "cc_secure_port", "port": "2" }]))
                ] },
                { "running": [] },
                { "running": [
                    node("c-host", "c", "cloud", json!([{ "name": "cc_secure_port", "port": "3" }]))
                ] }
            ]
        })
        .to_string()
        .into_bytes();

        let groups = transform(&raw).unwrap();
        let targets: Vec<_> = groups.iter().map(|g| g.targets[0].as_str()).collect();
        assert_eq!(targets, vec!["10.0.0.1:1", "10.0.0.2:2", "c:3"]);
    }

    #[test]
    fn missing_fields_default_instead_of_aborting() {
        // One bare record plus one well-formed record: the run must not
        // fail, and only the well-formed record emits a target.
        let raw = json!({
            "response_map": [
                { "running": [
                    {},
                    node("ip-10-0-1-23", "h1", "dc", json!([{ "name": "cc_secure_port", "port": "9443" }]))
                ] }
            ]
        })
        .to_string()
        .into_bytes();

        let groups = transform(&raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].targets, vec!["10.0.1.23:9443"]);
    }

    #[test]
    fn empty_response_map_yields_no_targets() {
        let raw = json!({ "response_map": [] }).to_string().into_bytes();
        assert!(transform(&raw).unwrap().is_empty());

        let raw = json!({}).to_string().into_bytes();
        assert!(transform(&raw).unwrap().is_empty());
    }

    #[test]
    fn unparseable_bytes_are_a_decode_error() {
        let err = transform(b"not json at all").unwrap_err();
        assert!(matches!(err, ScraperError::Decode(_)));
    }

    #[test]
    fn at_most_one_target_per_node() {
        let raw = response_with(vec![
            node("ip-10-0-0-1", "a", "dc", json!([{ "name": "cc_secure_port", "port": "1" }])),
            node("ip-10-0-0-2", "b", "dc", json!([])),
            node("ip-10-0-0-3", "c", "dc", json!([{ "name": "cc_secure_port", "port": "3" }])),
        ]);

        let groups = transform(&raw).unwrap();
        assert!(groups.len() <= 3);
        assert_eq!(groups.len(), 2);
    }
}
