//! Locating and validating `config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use spanfit::{SpanfitError, config::AppConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid TOML: {0}")]
    Parse(String),

    #[error("config file {0} does not exist")]
    MissingFile(PathBuf),

    #[error("{0}")]
    Validation(String),
}

impl From<ConfigError> for SpanfitError {
    fn from(err: ConfigError) -> Self {
        SpanfitError::Config(err.to_string())
    }
}

/// Loads the application config.
///
/// `explicit_path` wins when given. Otherwise the first existing file of
/// `./spanfit/config.toml` and the per-user config directory
/// (`~/.config/spanfit/config.toml` on Linux) is used, and built-in
/// defaults apply when neither exists.
///
/// # Errors
///
/// A missing explicit file, invalid TOML, or out-of-range values.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SpanfitError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Using config given on the command line");
        return load_config_file(path);
    }

    let local_config = Path::new("spanfit/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Using project config");
        return load_config_file(local_config);
    }

    if let Some(dirs) = ProjectDirs::from("com", "spanfit", "spanfit") {
        let system_config = dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Using user config");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "No user config");
    } else {
        debug!("No home directory, skipping user config");
    }

    debug!("No config file found, using defaults");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SpanfitError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let config: AppConfig = toml::from_str(&fs::read_to_string(path)?)
        .map_err(|err| ConfigError::Parse(err.to_string()))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let tie_break = config.solver().tie_break();
    if !tie_break.is_finite() || tie_break < 0.0 {
        return Err(ConfigError::Validation(format!(
            "solver.tie_break must be a non-negative number, got {tie_break}"
        )));
    }

    let style = config.style();
    if style.canvas_width() <= 0.0 || style.canvas_height() <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "style canvas must be positive, got {}x{}",
            style.canvas_width(),
            style.canvas_height()
        )));
    }

    Ok(())
}
