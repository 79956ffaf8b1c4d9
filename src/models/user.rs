use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One user record as returned by the directory backend.
///
/// The backend owns the row shape; the core carries rows verbatim and only the
/// row template ever looks inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRow(pub Value);

impl UserRow {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl From<Value> for UserRow {
    fn from(value: Value) -> Self {
        UserRow(value)
    }
}

/// Body of `GET /api/users`: `{ "result": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub result: Vec<UserRow>,
}

/// Parameters sent to the search endpoint, serialized into the query string
/// as `searchTerm=<value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

impl SearchQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
        }
    }
}
