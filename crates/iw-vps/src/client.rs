use crate::{ActionState, PowerState, VpsError, VpsResult};

use std::time::Duration;

use iw_config::VpsConfig;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

const ACTION_PATH: &str = "/Action";
const POWER_ON: &str = "PowerOn";
const POWER_OFF: &str = "PowerOff";

/// HTTP client for one server resource of the VPS control plane
#[derive(Clone)]
pub struct VpsClient {
    api_url: String,
    api_token: String,
    client: ReqwestClient,
}

impl std::fmt::Debug for VpsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VpsClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl VpsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_url` - Server resource URL; actions go to `{api_url}/Action`
    /// * `api_token` - Bearer token
    /// * `request_timeout` - Per-request timeout
    pub fn new(api_url: &str, api_token: &str, request_timeout: Duration) -> VpsResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(request_timeout)
            .build()
            .map_err(VpsError::from_reqwest)?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            client,
        })
    }

    pub fn from_config(config: &VpsConfig) -> VpsResult<Self> {
        let api_url = config
            .api_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| VpsError::not_configured("vps.api_url is not set"))?;
        let api_token = config
            .api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| VpsError::not_configured("vps.api_token is not set"))?;

        Self::new(api_url, api_token, config.request_timeout())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        self.client.request(method, &url).bearer_auth(&self.api_token)
    }

    /// Execute request, mapping non-2xx answers to [`VpsError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> VpsResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VpsError::api(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    pub async fn power_state(&self) -> VpsResult<PowerState> {
        let req = self.request(Method::GET, "");
        let body = self.execute(req).await?;
        let state = PowerState::from_server(&body);
        debug!("VPS power state: {state}");
        Ok(state)
    }

    pub async fn power_on(&self) -> VpsResult<ActionState> {
        self.action(POWER_ON).await
    }

    pub async fn power_off(&self) -> VpsResult<ActionState> {
        self.action(POWER_OFF).await
    }

    async fn action(&self, kind: &'static str) -> VpsResult<ActionState> {
        #[derive(Serialize)]
        struct ActionRequest {
            #[serde(rename = "Type")]
            kind: &'static str,
        }

        let req = self
            .request(Method::POST, ACTION_PATH)
            .json(&ActionRequest { kind });
        let body = self.execute(req).await?;
        let state = ActionState::from_action(&body);
        debug!("VPS action {kind} accepted: {state}");
        Ok(state)
    }
}
