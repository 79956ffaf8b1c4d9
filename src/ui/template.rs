use crate::models::UserRow;
use crate::state::config::ColumnConfig;
use chrono::DateTime;
use serde_json::Value;

/// Pure mapping from an opaque backend row to presentable cells.
///
/// The results table never reads row fields itself; everything it paints goes
/// through a template. Swapping the template changes the rendering without
/// touching the search machinery.
pub trait RowTemplate {
    fn headers(&self) -> Vec<String>;
    fn cells(&self, row: &UserRow) -> Vec<String>;
}

/// Column-list template driven by [`ColumnConfig`].
///
/// Unknown or missing fields render as empty cells; timestamp columns are
/// reformatted from RFC 3339 when they parse, shown raw when they don't.
pub struct ColumnTemplate {
    columns: Vec<ColumnConfig>,
}

impl ColumnTemplate {
    pub fn new(columns: Vec<ColumnConfig>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn render(&self, value: &Value, timestamp: bool) -> String {
        match value {
            Value::String(s) if timestamp => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| s.clone()),
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl RowTemplate for ColumnTemplate {
    fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.title.clone()).collect()
    }

    fn cells(&self, row: &UserRow) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                row.field(&column.field)
                    .map(|value| self.render(value, column.timestamp))
                    .unwrap_or_default()
            })
            .collect()
    }
}
