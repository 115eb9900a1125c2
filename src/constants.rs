/// Wire and file literals pinned in one place so the fetcher, transform,
/// and writer stay consistent.

/// Name of the port entry designating the scrape endpoint's port.
pub const SECURE_PORT_NAME: &str = "cc_secure_port";

/// The single label attached to every emitted target.
pub const TARGET_LABEL: &str = "labelname";

/// Output file consumed by the metrics scraper, overwritten each run.
pub const OUTPUT_FILE: &str = "targets.json";

// Required environment variables, read once at startup.
pub const ENV_API_URL: &str = "API_URL";
pub const ENV_API_USERNAME: &str = "API_USERNAME";
pub const ENV_API_PASSWORD: &str = "API_PASSWORD";
