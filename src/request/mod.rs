// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the portal API.
//!
//! [`Request`] wraps a `reqwest` client and normalizes every answer into a
//! [`Response`] envelope. Callers never see an `Err`:
//!
//! - transport failures show an error toast and yield a `local_error` envelope;
//! - `NOT_ATH` evicts the stored token and navigates to the root path;
//! - any other non-`OK` code shows one error toast unless disabled per call.

mod progress;
mod response;

pub use progress::{BusyIndicator, ProgressTracker};
pub use response::{Response, CODE_LOCAL_ERROR, CODE_NOT_AUTH, CODE_OK};

use crate::config::ApiConfig;
use crate::error::Result;
use crate::routes::{Navigator, ROOT_PATH};
use crate::storage::{Storage, TOKEN_KEY};
use crate::ui::notifications::MessageService;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use progress::BusyGuard;
use response::RawEnvelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Header carrying the cache-busting timestamp of write requests.
pub const TIMESTAMP_HEADER: &str = "X-Timestamp";
/// Body field carrying the cache-busting timestamp of write requests.
pub const TIMESTAMP_FIELD: &str = "_timestamp";
/// Query parameter carrying the cache-busting timestamp of read requests.
pub const TIMESTAMP_QUERY: &str = "_t";

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Client for the portal API.
#[derive(Clone)]
pub struct Request {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn Storage>,
    messages: MessageService,
    progress: Arc<dyn BusyIndicator>,
    navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Request {
    /// Builds the client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(
        config: &ApiConfig,
        storage: Arc<dyn Storage>,
        messages: MessageService,
        progress: Arc<dyn BusyIndicator>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            messages,
            progress,
            navigator,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` to `path`, showing an error toast on failure codes.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Response<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post_with(path, Some(body), true).await
    }

    /// POSTs to `path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Response<T> {
        self.post_with::<T, ()>(path, None, true).await
    }

    /// POSTs to `path`; `show_error` controls the toast for failure codes.
    pub async fn post_with<T, B>(&self, path: &str, body: Option<&B>, show_error: bool) -> Response<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let mut builder = self
            .client
            .post(self.url(path))
            .header(TIMESTAMP_HEADER, timestamp.to_string());

        if let Some(body) = body {
            let mut value = match serde_json::to_value(body) {
                Ok(value) => value,
                Err(err) => return self.fail(path, &err),
            };
            if let Value::Object(fields) = &mut value {
                fields.insert(TIMESTAMP_FIELD.to_string(), Value::from(timestamp));
            }
            // `json` keeps a Content-Type that is already set.
            builder = builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .json(&value);
        }

        self.execute(path, builder, show_error).await
    }

    /// GETs `path`, showing an error toast on failure codes.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Response<T> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let builder = self
            .client
            .get(self.url(path))
            .query(&[(TIMESTAMP_QUERY, timestamp)]);
        self.execute(path, builder, true).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        mut builder: RequestBuilder,
        show_error: bool,
    ) -> Response<T> {
        if let Some(token) = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty()) {
            builder = builder.header(AUTHORIZATION, token);
        }

        let busy = BusyGuard::start(self.progress.as_ref());
        let result = Self::send(builder).await;
        drop(busy);

        match result {
            Ok(envelope) => self.settle(path, envelope, show_error),
            Err(err) => self.fail(path, &err),
        }
    }

    async fn send(builder: RequestBuilder) -> reqwest::Result<RawEnvelope> {
        builder
            .send()
            .await?
            .error_for_status()?
            .json::<RawEnvelope>()
            .await
    }

    fn fail<T>(&self, path: &str, err: &dyn fmt::Display) -> Response<T> {
        tracing::warn!(path, %err, "request failed");
        self.messages.error(err.to_string());
        Response::local_error()
    }

    fn settle<T: DeserializeOwned>(
        &self,
        path: &str,
        envelope: RawEnvelope,
        show_error: bool,
    ) -> Response<T> {
        let code = envelope.code().to_string();
        let message = envelope.message().to_string();

        if code == CODE_NOT_AUTH {
            tracing::info!(path, "session rejected, signing out");
            self.storage.remove_item(TOKEN_KEY);
            self.navigator.navigate(ROOT_PATH);
            return Response {
                code,
                message,
                data: None,
            };
        }

        if code != CODE_OK {
            tracing::debug!(path, code = %code, "request rejected");
            if show_error {
                self.messages.error(envelope.error_text());
            }
        }

        let data = match envelope.data {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(data) => Some(data),
                Err(err) if code == CODE_OK => return self.fail(path, &err),
                Err(err) => {
                    tracing::debug!(path, %err, "ignoring payload of failed call");
                    None
                }
            },
        };

        Response {
            code,
            message,
            data,
        }
    }
}
