use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{Error, Result};

/// Which store implementation to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single-file SQLite database
    Sqlite,
    /// No local storage; every operation is a no-op
    Disabled,
}

impl Default for StorageBackend {
    fn default() -> Self {
        // Bundled SQLite has no browser target
        if cfg!(target_arch = "wasm32") {
            StorageBackend::Disabled
        } else {
            StorageBackend::Sqlite
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    pub database: Option<String>,
    pub storage: Option<StorageBackend>,
}

/// Resolved storage selection for this process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub database: PathBuf,
    pub backend: StorageBackend,
}

impl StorageSettings {
    /// Command-line flag wins over the config file, which wins over defaults.
    pub fn resolve(database: Option<PathBuf>, config: Option<&TrackerConfig>) -> Self {
        let database = database
            .or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
            .unwrap_or_else(default_database_path);
        let backend = config.and_then(|c| c.storage).unwrap_or_default();
        Self { database, backend }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("bugtracker.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("sctracker.db")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<TrackerConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TrackerConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TrackerConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("bugtracker.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bugtracker.toml");
        let config = TrackerConfig {
            database: Some("data/bugs.db".to_string()),
            storage: Some(StorageBackend::Disabled),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("data/bugs.db"));
        assert_eq!(loaded.storage, Some(StorageBackend::Disabled));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bugtracker.toml");
        write_config(&path, &TrackerConfig::default(), false).unwrap();

        assert!(matches!(
            write_config(&path, &TrackerConfig::default(), false),
            Err(Error::Config(_))
        ));
        write_config(&path, &TrackerConfig::default(), true).unwrap();
    }

    #[test]
    fn test_invalid_backend_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bugtracker.toml");
        std::fs::write(&path, "storage = \"postgres\"\n").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_precedence() {
        let config = TrackerConfig {
            database: Some("from-config.db".to_string()),
            storage: None,
        };

        let settings = StorageSettings::resolve(Some("from-flag.db".into()), Some(&config));
        assert_eq!(settings.database, PathBuf::from("from-flag.db"));

        let settings = StorageSettings::resolve(None, Some(&config));
        assert_eq!(settings.database, PathBuf::from("from-config.db"));
        assert_eq!(settings.backend, StorageBackend::default());

        let settings = StorageSettings::resolve(None, None);
        assert_eq!(settings.database, default_database_path());
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("a").join("b").join("sctracker.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());

        // Bare file names have no parent to create
        ensure_db_dir(Path::new("sctracker.db")).unwrap();
    }
}
