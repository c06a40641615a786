// SPDX-License-Identifier: MPL-2.0
//! Tunnel configuration management.

use super::types::{ClientConfig, ProxyConfig, ProxyRef, WebConfigInfo};
use crate::request::{Request, Response};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ProxyConfigApi {
    http: Request,
}

impl ProxyConfigApi {
    #[must_use]
    pub fn new(http: Request) -> Self {
        Self { http }
    }

    pub async fn get_proxy_configs(&self) -> Response<Vec<ProxyConfig>> {
        self.http.post_empty("/api/getProxyConfigs").await
    }

    /// Generates the client configuration covering every tunnel.
    pub async fn gen_client_config(&self) -> Response<ClientConfig> {
        self.http.post_empty("/api/genClientConfig").await
    }

    pub async fn add_proxy_config(&self, config: &ProxyConfig) -> Response<Value> {
        self.http.post("/api/addProxyConfigs", config).await
    }

    pub async fn del_proxy_config(&self, id: i64) -> Response<Value> {
        self.http.post("/api/delProxyConfigs", &ProxyRef { id }).await
    }

    pub async fn update_proxy_config(&self, config: &ProxyConfig) -> Response<Value> {
        self.http.post("/api/updateProxyConfig", config).await
    }

    /// Enables or disables a tunnel; only `id` and `state` are read.
    pub async fn update_proxy_state(&self, config: &ProxyConfig) -> Response<Value> {
        self.http.post("/api/updateProxyState", config).await
    }

    pub async fn add_web_configs(&self, info: &WebConfigInfo) -> Response<Value> {
        self.http.post("/api/addWebConfigs", info).await
    }

    pub async fn get_web_configs(&self, query: &WebConfigInfo) -> Response<WebConfigInfo> {
        self.http.post("/api/getWebConfigs", query).await
    }
}
