use serde::Serialize;
use serde_json::Value;

use super::{to_body, ApiClient};
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{CourseQuery, Method};
use crate::model::structs::Course;

const BASE: &str = "/cursos";

/// CRUD over `/cursos/`, with `nivel`/`gestion` filtering on listing
pub struct CoursesClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> CoursesClient<'a, C> {
    pub fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Inactive filters (`""`, `0`) are left off the query string entirely.
    pub async fn list(&self, query: &CourseQuery) -> Result<Vec<Course>> {
        let mut req = self
            .api
            .request(Method::Get, &format!("{BASE}/"))
            .query("skip", query.page.skip)
            .query("limit", query.page.limit);
        for (key, filter) in query.active_filters() {
            req = req.query(key, filter);
        }
        self.api.execute_as(req).await
    }

    pub async fn get(&self, id: i64) -> Result<Course> {
        let req = self.api.request(Method::Get, &format!("{BASE}/{id}/"));
        self.api.execute_as(req).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, course: &T) -> Result<Course> {
        let req = self
            .api
            .request(Method::Post, &format!("{BASE}/"))
            .json(to_body(course)?);
        self.api.execute_as(req).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, id: i64, course: &T) -> Result<Course> {
        let req = self
            .api
            .request(Method::Put, &format!("{BASE}/{id}/"))
            .json(to_body(course)?);
        self.api.execute_as(req).await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        let req = self.api.request(Method::Delete, &format!("{BASE}/{id}/"));
        self.api.execute(req).await
    }
}
