use crate::config::Config;
use crate::error::{Result, ScraperError};
use tracing::{info, instrument};

/// Fetches the discovery response body with HTTP Basic Authentication.
/// Anything other than a 200 is an immediate error; there is no retry.
#[instrument(skip(config), fields(url = %config.api_url))]
pub async fn fetch_discovery(config: &Config) -> Result<Vec<u8>> {
    info!("Fetching discovery response");

    let client = reqwest::Client::new();
    let response = client
        .get(&config.api_url)
        .basic_auth(&config.username, Some(&config.password))
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(ScraperError::Fetch { status });
    }

    let body = response.bytes().await?;
    info!("Fetched {} bytes from discovery API", body.len());
    Ok(body.to_vec())
}
