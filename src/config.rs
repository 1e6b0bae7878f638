//! Configuration and persisted preferences for storefront
//!
//! Handles loading configuration defaults and the single persisted
//! preference (the selected theme).
//! Config file location: ~/.config/storefront/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Key holding the selected theme in the preference store
pub const THEME_KEY: &str = "theme";

/// Default product listing endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
}

/// Catalog service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

impl Config {
    /// Get the config file path, if the platform has a config directory
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("storefront").join("config.toml"))
    }

    /// Load config from file, falling back to defaults if absent, unreadable
    /// or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Cannot read config {:?}: {}", path, e);
                return Config::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
            Config::default()
        })
    }
}

/// Config and preference store for the given config path
///
/// Without a path the defaults apply and preferences last for this run only.
pub fn load_settings(path: Option<PathBuf>) -> (Config, Box<dyn PreferenceStore>) {
    match path {
        Some(path) => (Config::load_from(&path), Box::new(FileStore::open(path))),
        None => {
            tracing::warn!("No config directory; preferences will not be saved");
            (Config::default(), Box::new(MemoryStore::default()))
        }
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Light,
    DarkSidebar,
    Colorful,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Light, ThemeName::DarkSidebar, ThemeName::Colorful]
    }

    /// Identifier as persisted in the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::DarkSidebar => "dark-sidebar",
            ThemeName::Colorful => "colorful",
        }
    }

    /// Name shown in the theme selector
    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::DarkSidebar => "Dark Sidebar",
            ThemeName::Colorful => "Colorful",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::DarkSidebar,
            ThemeName::DarkSidebar => ThemeName::Colorful,
            ThemeName::Colorful => ThemeName::Light,
        }
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s.trim())
            .with_context(|| format!("Unknown theme {:?}", s))
    }
}

/// String key-value store for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by a TOML file
///
/// Unrelated keys in the file (such as the `[catalog]` table) are kept
/// intact when a preference is written.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: toml::Table,
}

impl FileStore {
    /// Open the store at `path`; a missing or corrupt file reads as empty
    pub fn open(path: PathBuf) -> Self {
        let table = fs::read_to_string(&path)
            .ok()
            .and_then(|content| match content.parse::<toml::Table>() {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::warn!("Preference file {:?} is unreadable: {}", path, e);
                    None
                }
            })
            .unwrap_or_default();

        Self { path, table }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.table
            .insert(key.to_string(), toml::Value::String(value.to_string()));

        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(&self.table)
            .context("Failed to serialize preferences")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences to {:?}", self.path))?;

        Ok(())
    }
}

/// In-memory preference store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted theme, substituting the default when absent or unknown
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeName {
    match store.get(THEME_KEY) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!("{:#}, using default theme", e);
            ThemeName::default()
        }),
        None => ThemeName::default(),
    }
}

/// Persist the selected theme; failures are logged and otherwise ignored
pub fn save_theme(store: &mut dyn PreferenceStore, theme: ThemeName) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        tracing::warn!("Failed to persist theme: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("store is read-only")
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_load_theme_empty_store() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), ThemeName::Light);
    }

    #[test]
    fn test_load_theme_valid_values() {
        for theme in ThemeName::all() {
            let mut store = MemoryStore::default();
            store.set(THEME_KEY, theme.as_str()).unwrap();
            assert_eq!(load_theme(&store), *theme);
        }
    }

    #[test]
    fn test_load_theme_unknown_value() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(load_theme(&store), ThemeName::Light);
    }

    #[test]
    fn test_save_theme_round_trip() {
        for theme in ThemeName::all() {
            let mut store = MemoryStore::default();
            save_theme(&mut store, *theme);
            assert_eq!(load_theme(&store), *theme);
        }
    }

    #[test]
    fn test_save_theme_ignores_failures() {
        let mut store = ReadOnlyStore;
        save_theme(&mut store, ThemeName::Colorful);
        assert_eq!(load_theme(&store), ThemeName::Light);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Light;
        assert_eq!(theme.next(), ThemeName::DarkSidebar);
        assert_eq!(theme.next().next(), ThemeName::Colorful);
        assert_eq!(theme.next().next().next(), ThemeName::Light);
    }

    #[test]
    fn test_file_store_persists_and_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[catalog]\nurl = \"http://localhost:9000/products\"\n").unwrap();

        let mut store = FileStore::open(path.clone());
        save_theme(&mut store, ThemeName::DarkSidebar);

        // Simulate a reload
        let reopened = FileStore::open(path.clone());
        assert_eq!(load_theme(&reopened), ThemeName::DarkSidebar);

        let config = Config::load_from(&path);
        assert_eq!(config.catalog.url, "http://localhost:9000/products");
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront").join("config.toml");

        let mut store = FileStore::open(path.clone());
        assert_eq!(load_theme(&store), ThemeName::Light);

        save_theme(&mut store, ThemeName::Colorful);
        assert!(path.exists());
        assert_eq!(load_theme(&FileStore::open(path)), ThemeName::Colorful);
    }

    #[test]
    fn test_corrupt_file_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not valid toml").unwrap();

        let store = FileStore::open(path.clone());
        assert_eq!(load_theme(&store), ThemeName::Light);

        let config = Config::load_from(&path);
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_unreadable_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read
        let path = dir.path().join("config.toml");
        fs::create_dir_all(&path).unwrap();

        let (config, mut store) = load_settings(Some(path));
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(load_theme(store.as_ref()), ThemeName::Light);

        save_theme(store.as_mut(), ThemeName::Colorful);
        assert_eq!(load_theme(store.as_ref()), ThemeName::Colorful);
    }

    #[test]
    fn test_no_config_dir_uses_memory_store() {
        let (config, mut store) = load_settings(None);
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);

        save_theme(store.as_mut(), ThemeName::DarkSidebar);
        assert_eq!(load_theme(store.as_ref()), ThemeName::DarkSidebar);
    }
}
