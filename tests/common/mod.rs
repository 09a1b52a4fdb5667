#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use aula_core::model::{ApiRequest, RawResponse};
use aula_core::{ApiClient, ApiConfig, HttpClient, Result};

pub const BASE: &str = "http://backend.test/api";

/// Transport that replays canned responses and records every request
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockClient {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        let resp = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left");
        // let other tasks interleave, like a real network wait
        tokio::task::yield_now().await;
        Ok(resp)
    }
}

pub fn api() -> ApiClient<MockClient> {
    ApiClient::new(MockClient::default(), ApiConfig::new(BASE).unwrap())
}
