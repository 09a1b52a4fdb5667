//! WASM HTTP transport implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::ApiConfig;
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, Method, RawResponse};
use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use web_sys::{RequestCredentials, RequestMode};

use super::ApiClient;

/// HTTP transport for WASM environments using gloo_net
#[derive(Debug, Clone, Default)]
pub struct WasmClient;

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(request: &ApiRequest) -> RequestBuilder {
        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Delete => GlooMethod::DELETE,
        };

        RequestBuilder::new(&request.url)
            .method(method)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
            .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl HttpClient for WasmClient {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let builder = Self::build_request(&request);

        let resp = match &request.body {
            // json() also sets Content-Type: application/json
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };

        let status = resp.status();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Build an [`ApiClient`] backed by the browser's fetch API
pub fn create_client(config: ApiConfig) -> ApiClient<WasmClient> {
    ApiClient::new(WasmClient, config)
}
