use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

pub const DEFAULT_KEEP_DEPLOYMENTS: usize = 3;
pub const DEFAULT_PER_PAGE: u32 = 25;

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const PRODUCTION_ENVIRONMENT: &str = "production";

pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
pub const ENV_ACCOUNT_ID: &str = "CLOUDFLARE_ACCOUNT_ID";
pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";
pub const ENV_PROJECT_NAME: &str = "PAGES_PROJECT_NAME";
pub const ENV_KEEP_DEPLOYMENTS: &str = "PAGES_KEEP_DEPLOYMENTS";
pub const ENV_PER_PAGE: &str = "PAGES_PER_PAGE";
pub const ENV_PROTECT_PRODUCTION: &str = "PAGES_PROTECT_PRODUCTION";
pub const ENV_DRY_RUN: &str = "PAGES_DRY_RUN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
