use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the coordinator's control surface
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct BotRequest<'a> {
    server: &'a str,
    bot_id: &'a str,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Coordinator URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn `{error: {code, message}}` bodies into errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN");
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ClientError::api_error(code, message));
        }

        Ok(body)
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    pub async fn status(&self) -> CliClientResult<Value> {
        self.execute(self.request(Method::GET, "/api/status")).await
    }

    pub async fn list_servers(&self) -> CliClientResult<Value> {
        self.execute(self.request(Method::GET, "/api/servers")).await
    }

    pub async fn list_bots(&self) -> CliClientResult<Value> {
        self.execute(self.request(Method::GET, "/api/bots")).await
    }

    // =========================================================================
    // Monitoring
    // =========================================================================

    pub async fn start_monitoring(&self) -> CliClientResult<Value> {
        self.execute(self.request(Method::POST, "/api/start_monitoring"))
            .await
    }

    pub async fn stop_monitoring(&self) -> CliClientResult<Value> {
        self.execute(self.request(Method::POST, "/api/stop_monitoring"))
            .await
    }

    pub async fn set_auto_restart(&self, enabled: bool) -> CliClientResult<Value> {
        let body = serde_json::json!({ "enabled": enabled });
        let req = self.request(Method::POST, "/api/auto_restart").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Switching and Bots
    // =========================================================================

    pub async fn switch_server(&self, server: &str) -> CliClientResult<Value> {
        let body = serde_json::json!({ "server": server });
        let req = self.request(Method::POST, "/api/switch_server").json(&body);
        self.execute(req).await
    }

    pub async fn start_bot(&self, server: &str, bot_id: &str) -> CliClientResult<Value> {
        self.bot_command("/api/start_bot", server, bot_id).await
    }

    pub async fn stop_bot(&self, server: &str, bot_id: &str) -> CliClientResult<Value> {
        self.bot_command("/api/stop_bot", server, bot_id).await
    }

    pub async fn restart_bot(&self, server: &str, bot_id: &str) -> CliClientResult<Value> {
        self.bot_command("/api/restart_bot", server, bot_id).await
    }

    async fn bot_command(&self, path: &str, server: &str, bot_id: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, path)
            .json(&BotRequest { server, bot_id });
        self.execute(req).await
    }
}
