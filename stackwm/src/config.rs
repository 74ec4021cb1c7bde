//! Loading of the stacking configuration from `config.toml`.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use xdg::BaseDirectories;

pub use stackwm_core::Config;

/// Load the configuration from the XDG config directory, falling back to the
/// defaults when it can not be read or is not valid.
#[must_use]
pub fn load() -> Config {
    default_path()
        .and_then(|path| load_from_file(&path))
        .map_err(|err| tracing::error!("Unable to load config.toml: {:?}", err))
        .unwrap_or_default()
}

/// Path of `config.toml` in the XDG config directory. The directory is
/// created if needed.
///
/// # Errors
///
/// Will error if the XDG directories can not be determined or created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("stackwm")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Read and validate a config file. A missing file is created with the
/// default values.
///
/// # Errors
///
/// Will error if the file can not be read or written, if it is not valid
/// toml, or if the values do not pass [`Config::validate`].
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        fs::write(path, toml::to_string(&config)?)?;
        tracing::info!("Wrote default config to {}", path.display());
        return Ok(config);
    }
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
