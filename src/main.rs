use tracing::{error, info};

use discovery_scraper::config::Config;
use discovery_scraper::error::Result;
use discovery_scraper::logging;
use discovery_scraper::pipeline::Pipeline;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init_logging();

    if let Err(e) = run().await {
        error!("Discovery refresh failed: {}", e);
        eprintln!("❌ Discovery refresh failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Configuration is validated before any network call
    let config = Config::from_env()?;

    let result = Pipeline::run(&config).await?;

    info!("Discovery refresh finished");
    println!("\n📊 Discovery refresh results:");
    println!("   Targets written: {}", result.emitted_targets);
    println!("   Output file: {}", result.output_file);
    Ok(())
}
