mod cleaner;
mod cloudflare;
mod error;
mod provider;
mod retention;

pub use cleaner::{CleanupOptions, CleanupSummary, RetentionCleaner};
pub use cloudflare::CloudflarePagesClient;
pub use error::{PagesError, Result};
pub use provider::{Deployment, DeploymentApi};
pub use retention::{Partition, partition_by_recency, select_for_deletion, sort_newest_first};
