use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the CLI and embedding applications.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrdumConfigInner {
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct OrdumConfig {
    #[serde(flatten, default)]
    inner: Arc<OrdumConfigInner>,
}

impl Deref for OrdumConfig {
    type Target = OrdumConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for OrdumConfig {
    fn deref_mut(&mut self) -> &mut OrdumConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Registry start-up settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Catalog files whose enumerations are declared at start-up.
    pub catalogs: Vec<PathBuf>,
    /// Build every declared enumeration eagerly so bad declarations fail fast.
    pub preload: bool,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { catalogs: Vec::new(), preload: true }
    }
}
