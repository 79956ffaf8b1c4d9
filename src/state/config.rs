use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window_size: (f32, f32),
    /// Base URL of the directory service; the search path is fixed at
    /// `/api/users`.
    pub backend_url: String,
    /// Trailing-edge debounce on input edits, in milliseconds.
    pub debounce_ms: u64,
    /// How close to the content bottom (in points) counts as "at the
    /// bottom" for the scroll watcher.
    pub near_bottom_threshold: f32,
    /// Hard cap on accumulated rows; scroll appends re-issue the same query,
    /// so without a cap the table grows without bound.
    pub max_rows: usize,
    /// Columns the row template renders, in order.
    pub columns: Vec<ColumnConfig>,
    pub compact_rows: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub title: String,
    /// Field name looked up in the backend's row object.
    pub field: String,
    #[serde(default)]
    pub timestamp: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: (900.0, 600.0),
            backend_url: "http://localhost:8080".to_string(),
            debounce_ms: 200,
            near_bottom_threshold: 16.0,
            max_rows: 5000,
            columns: vec![
                ColumnConfig {
                    title: "ID".to_string(),
                    field: "id".to_string(),
                    timestamp: false,
                },
                ColumnConfig {
                    title: "Name".to_string(),
                    field: "name".to_string(),
                    timestamp: false,
                },
                ColumnConfig {
                    title: "Email".to_string(),
                    field: "email".to_string(),
                    timestamp: false,
                },
                ColumnConfig {
                    title: "Registered".to_string(),
                    field: "registered_at".to_string(),
                    timestamp: true,
                },
            ],
            compact_rows: false,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rosterview").join("config.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "falling back to default config");
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
