#![allow(async_fn_in_trait)] // 允许在 trait 中使用 async fn

use crate::error::Result;
use crate::model::dtos::{ApiRequest, RawResponse};

/// Common trait for HTTP transport functionality
///
/// Implementations only move bytes: they send the request as described and
/// hand back the status and body untouched. Turning a response into a value
/// or an error is the job of the normalizer in [`crate::client::response`].
pub trait HttpClient {
    /// Send one request and wait for the complete response
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}
