//! Startup settings for a diner session.
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for a [`DinerSession`](super::DinerSession).
///
/// Deserializable so it can live inside a host application's own config file;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Catalog file to load at startup.
    pub catalog_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/dish-data.csv"),
        }
    }
}

impl SessionConfig {
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("data/dish-data.csv"));
    }

    #[test]
    fn test_builder() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "catalog_path": "menu/today.csv" }"#).unwrap();
        assert_eq!(
            config,
            SessionConfig::default().with_catalog_path("menu/today.csv")
        );
    }
}
