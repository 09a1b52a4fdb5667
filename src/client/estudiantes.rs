use serde::Serialize;
use serde_json::Value;

use super::{to_body, ApiClient};
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{Method, Page};
use crate::model::structs::Student;

const BASE: &str = "/estudiantes";

/// CRUD over `/estudiantes/`
pub struct StudentsClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> StudentsClient<'a, C> {
    pub fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Student>> {
        let req = self
            .api
            .request(Method::Get, &format!("{BASE}/"))
            .query("skip", page.skip)
            .query("limit", page.limit);
        self.api.execute_as(req).await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        let req = self.api.request(Method::Get, &format!("{BASE}/{id}/"));
        self.api.execute_as(req).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, student: &T) -> Result<Student> {
        let req = self
            .api
            .request(Method::Post, &format!("{BASE}/"))
            .json(to_body(student)?);
        self.api.execute_as(req).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, id: i64, student: &T) -> Result<Student> {
        let req = self
            .api
            .request(Method::Put, &format!("{BASE}/{id}/"))
            .json(to_body(student)?);
        self.api.execute_as(req).await
    }

    /// Returns whatever confirmation the backend sends, often `{}`
    pub async fn delete(&self, id: i64) -> Result<Value> {
        let req = self.api.request(Method::Delete, &format!("{BASE}/{id}/"));
        self.api.execute(req).await
    }
}
