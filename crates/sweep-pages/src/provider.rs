use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sweep_config::constants;

#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Fetches one page of deployments. An empty page marks the end of the listing.
    async fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Deployment>>;

    async fn delete_deployment(&self, deployment_id: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub created_on: String,
    #[serde(default)]
    pub environment: Option<String>,
}

impl Deployment {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_on)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some(constants::PRODUCTION_ENVIRONMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": "f64788e9-fccd-4d4a-a28a-cb84f88f6",
            "short_id": "f64788e9",
            "project_name": "moontv",
            "environment": "preview",
            "url": "https://f64788e9.moontv.pages.dev",
            "created_on": "2021-03-09T00:55:03.923456Z"
        }"#;
        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.id, "f64788e9-fccd-4d4a-a28a-cb84f88f6");
        assert_eq!(deployment.environment.as_deref(), Some("preview"));
        assert!(!deployment.is_production());
        assert!(deployment.created_at().is_some());
    }

    #[test]
    fn test_environment_is_optional() {
        let deployment: Deployment =
            serde_json::from_str(r#"{"id": "a", "created_on": "not a date"}"#).unwrap();
        assert_eq!(deployment.environment, None);
        assert_eq!(deployment.created_at(), None);
    }
}
