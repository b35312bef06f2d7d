mod site;

pub use self::site::{BookingConfig, OutputConfig, SiteConfig};

use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "BAGOPS";
/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";
/// File stem looked up when no explicit path is given (`site.toml`, `site.json`, ...).
pub const DEFAULT_CONFIG: &str = "site";

/// Loads a configuration by layering environment overrides over an optional file.
///
/// 1. **Base File**: settings from `path`, or from the `site` file in the current working
///    directory. A missing default file is fine; an explicitly named one must exist.
/// 2. **Environment Overrides**: variables prefixed with `BAGOPS__`. Nested keys are joined
///    with double underscores (`BAGOPS__BOOKING__EMBED_HTML` maps to `booking.embed_html`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use bagops_kernel::config::{SiteConfig, load_config};
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.title.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process
/// environment when it is provided.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
