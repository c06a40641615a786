// SPDX-License-Identifier: MPL-2.0
//! Payloads exchanged with the portal API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseInfo {
    /// `true` once an administrator account exists.
    pub is_running: bool,
    pub version: String,
    pub is_upgrade: bool,
}

/// First-run administrator account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitInfo {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginInfo {
    pub username: String,
    pub password: String,
}

/// Filter of the server info queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryServerInfo {
    pub name: String,
    pub port: String,
    pub proxy_id: String,
}

/// A running tunnel server as reported by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    pub name: String,
    pub port: String,
    pub tunnel_type: String,
    pub tag: String,
    pub connections: u32,
    pub users: u32,
    pub proxy_id: String,
}

/// A client connected to a tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerClientInfo {
    pub host: String,
    pub last_time: String,
}

/// A configured tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyConfig {
    #[serde(alias = "idx")]
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub remote_port: u16,
    pub proxy_id: String,
    pub protocol: String,
    pub state: i32,
    pub run_state: i32,
    pub destination: String,
    pub is_running: bool,
    pub runtime: String,
    pub clients: u32,
    pub is_exist_web: bool,
}

impl ProxyConfig {
    #[must_use]
    pub fn is_web(&self) -> bool {
        matches!(self.protocol.as_str(), "HTTP" | "HTTPS")
    }
}

/// Selects a tunnel by id, as expected by deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProxyRef {
    pub id: i64,
}

/// Domain routing of an HTTP(S) tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebConfigInfo {
    pub id: String,
    #[serde(rename = "RefProxyId")]
    pub ref_proxy_id: i64,
    pub cert_file: String,
    pub key_file: String,
    pub proxy: Vec<WebProxyRoute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebProxyRoute {
    pub id: String,
    pub domain: String,
    pub paths: Vec<String>,
}

/// Generated client configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub server_host: String,
    pub server_port: u16,
    pub token: String,
    /// Heartbeat interval in nanoseconds.
    pub ping_time: i64,
    pub tunnels: Vec<ClientTunnelConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientTunnelConfig {
    #[serde(rename = "type")]
    pub tunnel_type: String,
    pub destination: String,
    pub proxy_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp_size: Option<u32>,
}

/// Token clients use to connect to the tunnel server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthToken {
    pub token: String,
    pub status: bool,
    pub create_time: String,
    pub expire: String,
}
