use crate::provider::{Deployment, DeploymentApi};
use crate::retention;
use std::collections::HashSet;
use std::sync::Arc;
use sweep_config::{PagesConfig, constants};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    pub keep_deployments: usize,
    pub per_page: u32,
    pub protect_production: bool,
    pub dry_run: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            keep_deployments: constants::DEFAULT_KEEP_DEPLOYMENTS,
            per_page: constants::DEFAULT_PER_PAGE,
            protect_production: false,
            dry_run: false,
        }
    }
}

impl From<&PagesConfig> for CleanupOptions {
    fn from(config: &PagesConfig) -> Self {
        Self {
            keep_deployments: config.keep_deployments,
            per_page: config.per_page,
            protect_production: config.protect_production,
            dry_run: config.dry_run,
        }
    }
}

/// Summary of one retention run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub found: usize,
    pub selected: usize,
    pub deleted: usize,
    pub failed: usize,
    pub skipped: usize,
    pub planned: usize,
}

pub struct RetentionCleaner {
    api: Arc<dyn DeploymentApi>,
    options: CleanupOptions,
}

impl RetentionCleaner {
    pub fn new(api: Arc<dyn DeploymentApi>, options: CleanupOptions) -> Self {
        Self { api, options }
    }

    /// Pages through the listing until an empty page comes back.
    ///
    /// A failed page ends the listing early and whatever was collected so far
    /// is returned. Ids already seen on an earlier page are dropped, and a page
    /// made up entirely of seen ids ends the listing.
    pub async fn list_deployments(&self) -> Vec<Deployment> {
        let mut deployments = Vec::new();
        let mut seen = HashSet::new();
        let mut page = 1;

        loop {
            let batch = match self.api.list_page(page, self.options.per_page).await {
                Ok(batch) => batch,
                Err(e) => {
                    error!("Failed to list deployments: {}", e);
                    break;
                }
            };

            if batch.is_empty() {
                break;
            }

            debug!("Fetched page {} with {} deployment(s)", page, batch.len());

            let before = deployments.len();

            for deployment in batch {
                if seen.insert(deployment.id.clone()) {
                    deployments.push(deployment);
                } else {
                    warn!(
                        "Deployment {} appeared on more than one page, ignoring duplicate",
                        deployment.id
                    );
                }
            }

            if deployments.len() == before {
                warn!(
                    "Page {} contained no new deployments, stopping the listing",
                    page
                );
                break;
            }

            page += 1;
        }

        deployments
    }

    /// Deletes a single deployment. Failures are logged and reported back, never
    /// propagated.
    pub async fn delete(&self, deployment_id: &str) -> bool {
        match self.api.delete_deployment(deployment_id).await {
            Ok(()) => {
                info!("Deleted deployment: {}", deployment_id);
                true
            }
            Err(e) => {
                error!("Failed to delete {}: {}", deployment_id, e);
                false
            }
        }
    }

    pub async fn run(&self) -> CleanupSummary {
        let mut summary = CleanupSummary::default();

        info!("Starting cleanup of old deployments");

        let deployments = self.list_deployments().await;
        summary.found = deployments.len();

        let to_delete = retention::select_for_deletion(deployments, self.options.keep_deployments);
        summary.selected = to_delete.len();

        info!(
            "Found {} deployments. Deleting {} old ones...",
            summary.found, summary.selected
        );

        for deployment in &to_delete {
            if self.options.protect_production && deployment.is_production() {
                info!(
                    "Skipping deletion of production deployment: {}",
                    deployment.id
                );
                summary.skipped += 1;
                continue;
            }

            if self.options.dry_run {
                info!(
                    "Would delete deployment: {} (created {})",
                    deployment.id, deployment.created_on
                );
                summary.planned += 1;
                continue;
            }

            if self.delete(&deployment.id).await {
                summary.deleted += 1;
            } else {
                summary.failed += 1;
            }
        }

        info!(
            "Cleanup finished: {} deleted, {} failed, {} skipped, {} planned",
            summary.deleted, summary.failed, summary.skipped, summary.planned
        );

        summary
    }
}
