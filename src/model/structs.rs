use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Entity schemas as the backend returns them. Only the fields this layer
// relies on are typed; everything else rides along in `extra` so that a
// decoded entity serializes back to the same JSON.

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Student {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `nivel` and `gestion` stay in `extra` so an explicit `null` survives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One student/course relation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Assignment {
    pub id_estudiante: i64,
    pub id_curso: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    /// Opaque attribute lookup, e.g. `student.field("nombre")`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

impl Course {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Level, if the backend sent a non-null one
    pub fn nivel(&self) -> Option<&Value> {
        self.field("nivel").filter(|v| !v.is_null())
    }

    /// Term/year, if the backend sent a non-null one
    pub fn gestion(&self) -> Option<&Value> {
        self.field("gestion").filter(|v| !v.is_null())
    }
}
