use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Checked in the working directory, in order, when `--config` is not given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["vubench.toml", "vubench.json"];

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn detect(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Loads the explicit config file, or the first default file that exists.
///
/// Returns `Ok(None)` when no path was given and no default file is present.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        return load_config_file(Path::new(path)).map(Some);
    }

    DEFAULT_CONFIG_FILES
        .iter()
        .map(Path::new)
        .find(|candidate| candidate.exists())
        .map(load_config_file)
        .transpose()
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::detect(path).map_err(AppError::config)?;
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    format.parse(path, &content).map_err(AppError::config)
}
