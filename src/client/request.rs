//! No-WASM HTTP transport implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::config::ApiConfig;
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, Method, RawResponse};
use reqwest::Client;

use super::ApiClient;

/// HTTP transport for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client, sharing its connection pool
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl ReqwestClient {
    /// Turn an [`ApiRequest`] into the exact request reqwest will send
    pub fn build_request(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }
}

impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let req = self.build_request(&request)?;
        let resp = self.client.execute(req).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Build an [`ApiClient`] backed by reqwest
pub fn create_client(config: ApiConfig) -> Result<ApiClient<ReqwestClient>> {
    Ok(ApiClient::new(ReqwestClient::new()?, config))
}
