// SPDX-License-Identifier: MPL-2.0
//! Client connection token.

use super::types::AuthToken;
use crate::request::{Request, Response};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct MySettingApi {
    http: Request,
}

impl MySettingApi {
    #[must_use]
    pub fn new(http: Request) -> Self {
        Self { http }
    }

    pub async fn get_auth_token(&self) -> Response<AuthToken> {
        self.http.post_empty("/api/getToken").await
    }

    pub async fn generate_auth_token(&self) -> Response<AuthToken> {
        self.http.post_empty("/api/generateToken").await
    }

    pub async fn del_token(&self) -> Response<Value> {
        self.http.post_empty("/api/delToken").await
    }
}
