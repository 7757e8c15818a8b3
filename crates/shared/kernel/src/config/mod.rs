use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "glzig.toml";
/// Environment prefix; nesting uses `__` (`GLZIG__SELECTION__API=gles2`).
pub const ENV_PREFIX: &str = "GLZIG";

#[glzig_derive::glzig_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a TOML file overlaid with `GLZIG__*` environment variables.
///
/// * An explicit `path` must exist.
/// * Without a path, [`DEFAULT_CONFIG_FILE`] is read when present and silently skipped otherwise,
///   so running with no configuration at all yields `T`'s defaults plus environment overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a file or variable does not
/// match `T`, or the file is not valid TOML.
///
/// # Example
/// ```rust
/// use glzig_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     version: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("does-not-exist.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path.as_ref() {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG_FILE}");
            File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
