use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verbs used against the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL without the query string
    pub url: String,
    /// Query parameters in emission order
    pub query: Vec<(String, String)>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// URL with the raw query pairs appended, for logs and assertions.
    /// Values are not percent-encoded; the transport encodes them.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }
}

/// Status and body of a completed response, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, same rule as `Response.ok` in the browser
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pagination passthrough for collection endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

/// Value of a course listing filter
///
/// Empty text and the number zero are "falsy": the backend contract is that
/// such a filter is not sent at all, so they behave exactly like `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Text(String),
    Number(i64),
}

impl Filter {
    pub fn is_active(&self) -> bool {
        match self {
            Filter::Text(s) => !s.is_empty(),
            Filter::Number(n) => *n != 0,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Filter::Text(s) => f.write_str(s),
            Filter::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        Filter::Text(s.to_string())
    }
}

impl From<String> for Filter {
    fn from(s: String) -> Self {
        Filter::Text(s)
    }
}

impl From<i64> for Filter {
    fn from(n: i64) -> Self {
        Filter::Number(n)
    }
}

impl From<i32> for Filter {
    fn from(n: i32) -> Self {
        Filter::Number(n.into())
    }
}

/// Parameters for listing courses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub page: Page,
    pub nivel: Option<Filter>,
    pub gestion: Option<Filter>,
}

impl CourseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn nivel(mut self, nivel: impl Into<Filter>) -> Self {
        self.nivel = Some(nivel.into());
        self
    }

    pub fn gestion(mut self, gestion: impl Into<Filter>) -> Self {
        self.gestion = Some(gestion.into());
        self
    }

    /// Filters that actually go on the query string, in wire order
    pub fn active_filters(&self) -> impl Iterator<Item = (&'static str, &Filter)> {
        [("nivel", self.nivel.as_ref()), ("gestion", self.gestion.as_ref())]
            .into_iter()
            .filter_map(|(key, filter)| filter.filter(|f| f.is_active()).map(|f| (key, f)))
    }
}

/// Body identifying one student/course relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentParams {
    pub id_estudiante: i64,
    pub id_curso: i64,
}

/// Body for enrolling many students in one course at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssignmentParams {
    pub id_curso: i64,
    pub ids_estudiantes: Vec<i64>,
}
