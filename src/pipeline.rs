use crate::config::Config;
use crate::constants::OUTPUT_FILE;
use crate::error::Result;
use crate::fetcher;
use crate::transform::transform;
use crate::writer;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

/// Result of a complete discovery refresh run.
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub emitted_targets: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Runs fetch, transform, and write strictly in sequence. Each
    /// invocation is independent; the only state left behind is the
    /// overwritten output file.
    #[instrument(skip(config))]
    pub async fn run(config: &Config) -> Result<PipelineResult> {
        // Step 1: fetch raw discovery bytes
        info!("📡 Fetching discovery response...");
        println!("📡 Fetching discovery response...");
        let raw = fetcher::fetch_discovery(config).await?;

        // Step 2: transform into scrape targets
        info!("🔧 Transforming discovery response...");
        println!("🔧 Transforming discovery response...");
        let groups = transform(&raw)?;
        info!("✅ Extracted {} scrape targets", groups.len());
        println!("✅ Extracted {} scrape targets", groups.len());

        // Step 3: overwrite the targets file
        info!("💾 Writing targets to {}...", OUTPUT_FILE);
        println!("💾 Writing targets to {}...", OUTPUT_FILE);
        writer::write_targets(&groups, Path::new(OUTPUT_FILE))?;

        Ok(PipelineResult {
            emitted_targets: groups.len(),
            output_file: OUTPUT_FILE.to_string(),
        })
    }
}
