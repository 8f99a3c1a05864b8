use crate::constants;
use crate::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// Settings for one Pages retention run, built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct PagesConfig {
    pub api_token: String,
    pub account_id: String,
    pub project_name: String,
    pub api_base: String,
    pub keep_deployments: usize,
    pub per_page: u32,
    pub protect_production: bool,
    pub dry_run: bool,
}

impl PagesConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let per_page = parse_number(constants::ENV_PER_PAGE, get(constants::ENV_PER_PAGE))?
            .unwrap_or(constants::DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(ConfigError::Zero(constants::ENV_PER_PAGE));
        }

        Ok(Self {
            api_token: required(constants::ENV_API_TOKEN)?,
            account_id: required(constants::ENV_ACCOUNT_ID)?,
            project_name: required(constants::ENV_PROJECT_NAME)?,
            api_base: get(constants::ENV_API_BASE)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| constants::DEFAULT_API_BASE.into()),
            keep_deployments: parse_number(
                constants::ENV_KEEP_DEPLOYMENTS,
                get(constants::ENV_KEEP_DEPLOYMENTS),
            )?
            .unwrap_or(constants::DEFAULT_KEEP_DEPLOYMENTS),
            per_page,
            protect_production: parse_bool(
                constants::ENV_PROTECT_PRODUCTION,
                get(constants::ENV_PROTECT_PRODUCTION),
            )?,
            dry_run: parse_bool(constants::ENV_DRY_RUN, get(constants::ENV_DRY_RUN))?,
        })
    }

    /// Listing endpoint for the configured project.
    pub fn deployments_url(&self) -> String {
        format!(
            "{}/accounts/{}/pages/projects/{}/deployments",
            self.api_base, self.account_id, self.project_name
        )
    }
}

impl fmt::Debug for PagesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagesConfig")
            .field("api_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("project_name", &self.project_name)
            .field("api_base", &self.api_base)
            .field("keep_deployments", &self.keep_deployments)
            .field("per_page", &self.per_page)
            .field("protect_production", &self.protect_production)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: Option<String>) -> Result<Option<T>> {
    value
        .map(|v| {
            v.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                name,
                value: v.clone(),
            })
        })
        .transpose()
}

fn parse_bool(name: &'static str, value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(ConfigError::InvalidBool {
            name,
            value: v.to_string(),
        }),
    }
}
