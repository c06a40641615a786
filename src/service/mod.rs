// SPDX-License-Identifier: MPL-2.0
//! Typed calls to the portal API.
//!
//! Every call is a POST returning a [`Response`](crate::request::Response)
//! envelope; failures are already reported to the user by the request layer.

mod base_info;
mod my_setting;
mod proxy_config;
pub mod types;

pub use base_info::BaseInfoApi;
pub use my_setting::MySettingApi;
pub use proxy_config::ProxyConfigApi;
