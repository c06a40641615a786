// SPDX-License-Identifier: MPL-2.0
//! Server status, first-run setup and sign-in.

use super::types::{BaseInfo, InitInfo, LoginInfo, QueryServerInfo, ServerClientInfo, ServerInfo};
use crate::request::{Request, Response};
use crate::storage::{Storage, TOKEN_KEY};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct BaseInfoApi {
    http: Request,
    storage: Arc<dyn Storage>,
}

impl fmt::Debug for BaseInfoApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseInfoApi")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

impl BaseInfoApi {
    #[must_use]
    pub fn new(http: Request, storage: Arc<dyn Storage>) -> Self {
        Self { http, storage }
    }

    pub async fn get_base_info(&self) -> Response<BaseInfo> {
        self.http.post_empty("/api/getBaseInfo").await
    }

    /// Creates the administrator account of a fresh server.
    pub async fn init_server(&self, info: &InitInfo) -> Response<InitInfo> {
        self.http.post("/api/initBrookServer", info).await
    }

    /// Signs in and stores the session token on success.
    pub async fn login(&self, info: &LoginInfo) -> Response<String> {
        let response: Response<String> = self.http.post("/api/login", info).await;
        if let Some(token) = response.data.as_deref().filter(|_| response.success()) {
            self.storage.set_item(TOKEN_KEY, token);
            tracing::info!(username = %info.username, "signed in");
        }
        response
    }

    pub async fn get_server_info(&self, query: &QueryServerInfo) -> Response<Vec<ServerInfo>> {
        self.http.post("/api/getServerInfo", query).await
    }

    /// Lists the clients connected to the tunnel named by `query.proxy_id`.
    pub async fn get_server_info_by_proxy_id(
        &self,
        query: &QueryServerInfo,
    ) -> Response<Vec<ServerClientInfo>> {
        self.http.post("/api/getServerInfoByProxyId", query).await
    }
}
