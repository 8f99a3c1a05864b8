use crate::provider::{Deployment, DeploymentApi};
use crate::{PagesError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use sweep_config::{PagesConfig, constants};

/// Pages deployments client for one project, authenticated with a bearer token.
pub struct CloudflarePagesClient {
    client: reqwest::Client,
    deployments_url: String,
    api_token: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    result: Option<Vec<Deployment>>,
}

impl CloudflarePagesClient {
    pub fn new(config: &PagesConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(constants::HTTP_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            deployments_url: config.deployments_url(),
            api_token: config.api_token.clone(),
        })
    }
}

/// Decodes a listing body. Anything without `"success": true` is reported as a
/// failure carrying the raw body.
fn parse_list_response(body: &str) -> Result<Vec<Deployment>> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("success").and_then(serde_json::Value::as_bool) != Some(true) {
        return Err(PagesError::ApiFailure(value.to_string()));
    }

    let response: ListResponse = serde_json::from_value(value)?;
    Ok(response.result.unwrap_or_default())
}

#[async_trait]
impl DeploymentApi for CloudflarePagesClient {
    async fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Deployment>> {
        let url = format!(
            "{}?page={}&per_page={}",
            self.deployments_url, page, per_page
        );

        let body = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .text()
            .await?;

        parse_list_response(&body)
    }

    async fn delete_deployment(&self, deployment_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.deployments_url, deployment_id);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PagesError::DeleteFailed {
            id: deployment_id.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
