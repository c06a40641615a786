// SPDX-License-Identifier: MPL-2.0
//! Response envelope of the portal API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Code of a successful call.
pub const CODE_OK: &str = "OK";
/// Code asking the client to authenticate again.
pub const CODE_NOT_AUTH: &str = "NOT_ATH";
/// Code of a call that never produced an answer.
pub const CODE_LOCAL_ERROR: &str = "local_error";

/// Normalized answer of an API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Response<T> {
    /// Envelope returned when the request failed before reaching the API.
    #[must_use]
    pub fn local_error() -> Self {
        Self {
            code: CODE_LOCAL_ERROR.to_string(),
            message: String::new(),
            data: None,
        }
    }

    /// `true` iff the code is `OK`.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == CODE_OK
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Envelope as sent by the server, before normalization.
///
/// Older endpoints report failures through `errorCode`/`errorMsg`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "errorCode")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "errorMsg")]
    pub error_msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl RawEnvelope {
    pub fn code(&self) -> &str {
        non_empty(&self.code)
            .or(non_empty(&self.error_code))
            .unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        non_empty(&self.message)
            .or(non_empty(&self.error_msg))
            .unwrap_or_default()
    }

    /// Text shown to the user for a failed call.
    pub fn error_text(&self) -> &str {
        match self.message() {
            "" => "Error",
            message => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_only_for_ok() {
        let ok = Response::<()> {
            code: "OK".into(),
            message: String::new(),
            data: None,
        };
        assert!(ok.success());
        assert!(!Response::<()>::local_error().success());
        assert_eq!(Response::<()>::local_error().code, CODE_LOCAL_ERROR);
    }

    #[test]
    fn legacy_fields_are_fallbacks() {
        let envelope = raw(json!({"errorCode": "ERR", "errorMsg": "boom"}));
        assert_eq!(envelope.code(), "ERR");
        assert_eq!(envelope.message(), "boom");

        let envelope = raw(json!({"code": "OK", "errorCode": "ERR", "message": "fine"}));
        assert_eq!(envelope.code(), "OK");
        assert_eq!(envelope.message(), "fine");
    }

    #[test]
    fn error_text_defaults() {
        assert_eq!(raw(json!({"code": "ERR"})).error_text(), "Error");
        assert_eq!(raw(json!({"code": "ERR", "message": null})).error_text(), "Error");
        assert_eq!(raw(json!({"code": "ERR", "message": "bad input"})).error_text(), "bad input");
    }
}
