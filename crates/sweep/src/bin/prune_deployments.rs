//! Deletes all but the most recent Pages deployments of one project.
//!
//! Configuration is read from the process environment only:
//! `CLOUDFLARE_API_TOKEN`, `CLOUDFLARE_ACCOUNT_ID` and `PAGES_PROJECT_NAME`
//! are required; `PAGES_KEEP_DEPLOYMENTS`, `PAGES_PER_PAGE`,
//! `PAGES_PROTECT_PRODUCTION`, `PAGES_DRY_RUN`, `CLOUDFLARE_API_BASE` and
//! `LOG_FORMAT` are optional. A `.env` file in the working directory, if
//! present, is loaded into the environment before anything is read; variables
//! already set take precedence. There is no other configuration file.

use std::sync::Arc;
use sweep_config::{PagesConfig, telemetry};
use sweep_pages::{CleanupOptions, CloudflarePagesClient, RetentionCleaner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = PagesConfig::from_env()?;

    tracing::info!(
        "Pruning deployments of Pages project {} (keeping {}, dry run: {})",
        config.project_name,
        config.keep_deployments,
        config.dry_run
    );

    let client = CloudflarePagesClient::new(&config)?;
    let cleaner = RetentionCleaner::new(Arc::new(client), CleanupOptions::from(&config));

    // Per-deployment failures are logged by the cleaner and never change the exit status.
    cleaner.run().await;

    tracing::info!("Cleanup task finished");

    Ok(())
}
