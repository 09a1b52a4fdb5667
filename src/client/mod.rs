//! Client module - resource clients over a pluggable HTTP transport
//!
//! [`ApiClient`] owns the transport, the backend configuration and the
//! response normalizer. The resource clients borrow it and only describe
//! requests; they never touch UI state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, Method};

pub mod asignaciones;
pub mod cursos;
pub mod estudiantes;
pub mod response;

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub use asignaciones::AssignmentsClient;
pub use cursos::CoursesClient;
pub use estudiantes::StudentsClient;
pub use response::{handle_json_response, Normalizer};

#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    http: C,
    config: ApiConfig,
    normalize: Normalizer,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, config: ApiConfig) -> Self {
        Self {
            http,
            config,
            normalize: handle_json_response,
        }
    }

    /// Replace the response normalizer used by every resource client
    pub fn with_normalizer(mut self, normalize: Normalizer) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn estudiantes(&self) -> StudentsClient<'_, C> {
        StudentsClient::new(self)
    }

    pub fn cursos(&self) -> CoursesClient<'_, C> {
        CoursesClient::new(self)
    }

    pub fn asignaciones(&self) -> AssignmentsClient<'_, C> {
        AssignmentsClient::new(self)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(path))
    }

    /// Send a request and normalize the response into JSON
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        log::debug!("{} {}", request.method, request.full_url());
        let resp = self.http.send(request).await?;
        log::debug!("Response status: {}", resp.status);
        (self.normalize)(resp)
    }

    /// Like [`Self::execute`], then validate the body against a schema
    pub async fn execute_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

pub(crate) fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    Ok(serde_json::to_value(payload)?)
}
