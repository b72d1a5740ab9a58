use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix for overrides, e.g. `ORDUM__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "ORDUM";

/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG: &str = "ordum";

/// Custom error type for config loading.
#[ordum_derive::ordum_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from `path`, which must exist. Without a path, an
///    `ordum.{toml,json,yaml,...}` file in the working directory is used if present.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `ORDUM__`.
///    Nested structures are accessed using double underscores (e.g., `ORDUM__LOGGING__LEVEL`
///    maps to `logging.level`).
///
/// # Errors
/// This function will return an error if:
/// * The specified configuration file cannot be found or parsed.
/// * The merged settings do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use ordum_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(AsRef::as_ref), environment())
}

/// The `ORDUM__` environment source used by [`load_config`].
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

/// Layers `path` (or the optional default file) under the given environment source.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_layered<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) =
        path.map_or_else(|| (PathBuf::from(DEFAULT_CONFIG), false), |p| (p.to_path_buf(), true));

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordum_domain::config::OrdumConfig;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn reads_sections_from_file() {
        let file = write_config(
            "[logging]\nlevel = \"debug\"\njson = true\n\n[registry]\npreload = false\n",
        );

        let cfg: OrdumConfig = load_layered(Some(file.path()), fake_env(&[])).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.json);
        assert!(cfg.logging.console);
        assert!(!cfg.registry.preload);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config::<OrdumConfig>(Some("definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    }

    #[test]
    fn environment_overrides_the_file() {
        let file = write_config("[logging]\nlevel = \"debug\"\n");
        let env = fake_env(&[("ORDUM__LOGGING__LEVEL", "trace")]);

        let cfg: OrdumConfig = load_layered(Some(file.path()), env).unwrap();
        assert_eq!(cfg.logging.level, "trace");
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let cfg: OrdumConfig = load_layered(None, fake_env(&[])).unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.registry.catalogs.is_empty());
        assert!(cfg.registry.preload);
    }
}
