use serde_json::Value;

use super::{to_body, ApiClient};
use crate::error::Result;
use crate::interface::HttpClient;
use crate::model::dtos::{AssignmentParams, BulkAssignmentParams, Method};
use crate::model::structs::{Assignment, Course, Student};

const BASE: &str = "/asignaciones";

/// Student/course enrollment relations
///
/// A relation has no id of its own; it is always addressed by the
/// `(id_estudiante, id_curso)` pair. Duplicate handling and per-item results
/// of bulk enrollment are decided by the backend and returned untouched.
pub struct AssignmentsClient<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> AssignmentsClient<'a, C> {
    pub fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// Returns the relation as created by the backend
    pub async fn assign(&self, id_estudiante: i64, id_curso: i64) -> Result<Assignment> {
        let params = AssignmentParams {
            id_estudiante,
            id_curso,
        };
        let req = self
            .api
            .request(Method::Post, &format!("{BASE}/"))
            .json(to_body(&params)?);
        self.api.execute_as(req).await
    }

    pub async fn assign_bulk(&self, id_curso: i64, ids_estudiantes: &[i64]) -> Result<Value> {
        let params = BulkAssignmentParams {
            id_curso,
            ids_estudiantes: ids_estudiantes.to_vec(),
        };
        let req = self
            .api
            .request(Method::Post, &format!("{BASE}/masivo"))
            .json(to_body(&params)?);
        self.api.execute(req).await
    }

    /// The pair travels in a JSON body on the DELETE, not in the path.
    pub async fn unassign(&self, id_estudiante: i64, id_curso: i64) -> Result<Value> {
        let params = AssignmentParams {
            id_estudiante,
            id_curso,
        };
        let req = self
            .api
            .request(Method::Delete, &format!("{BASE}/"))
            .json(to_body(&params)?);
        self.api.execute(req).await
    }

    pub async fn students_of_course(&self, id_curso: i64) -> Result<Vec<Student>> {
        let req = self
            .api
            .request(Method::Get, &format!("{BASE}/curso/{id_curso}/"));
        self.api.execute_as(req).await
    }

    /// Enabled subset of a course's students, computed by the backend
    pub async fn eligible_students_of_course(&self, id_curso: i64) -> Result<Vec<Student>> {
        let req = self.api.request(
            Method::Get,
            &format!("{BASE}/curso/{id_curso}/estudiantes-habilitados"),
        );
        self.api.execute_as(req).await
    }

    pub async fn courses_of_student(&self, id_estudiante: i64) -> Result<Vec<Course>> {
        let req = self
            .api
            .request(Method::Get, &format!("{BASE}/estudiante/{id_estudiante}/"));
        self.api.execute_as(req).await
    }
}
